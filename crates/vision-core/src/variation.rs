//! Principal-variation formatting: whitespace-separated plies grouped into
//! numbered move pairs.

pub const NO_VARIATION: &str = "No variation available";

/// Split a PV line into individual plies, dropping empty tokens.
pub fn variation_plies(pv: &str) -> Vec<String> {
    pv.split_whitespace().map(str::to_string).collect()
}

/// `"e2e4 e7e5 g1f3"` → `"1. e2e4 e7e5 2. g1f3"`. A trailing unpaired ply is
/// rendered alone under its move number; an empty line yields the literal
/// no-variation message.
pub fn format_principal_variation(pv: &str) -> String {
    let plies = variation_plies(pv);
    if plies.is_empty() {
        return NO_VARIATION.to_string();
    }

    plies
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white, black),
            [white] => format!("{}. {}", i + 1, white),
            _ => unreachable!("chunks(2) yields 1 or 2 plies"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
