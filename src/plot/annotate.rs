use std::collections::HashSet;

use crate::{
    cli::types::Stat,
    stats::{Leader, PlayerRecord},
};


/// A scatter point that gets a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub index: usize,
    pub name: String,
    pub minutes: f64,
    pub value: f64,
    /// Reference players are drawn in red, bold, with an enlarged marker.
    pub reference: bool,
}

/// Every record whose name is among the leaders or the reference players,
/// in record order.
///
/// Membership is by name, so every row of a leader who appears more than
/// once (e.g. after a trade) is labelled.
pub fn select_annotations(
    records: &[PlayerRecord],
    stat: Stat,
    leaders: &[Leader],
    references: &[String],
) -> Vec<Annotation> {
    let leader_names: HashSet<&str> = leaders.iter().map(|l| l.name.as_str()).collect();
    let reference_names: HashSet<&str> = references.iter().map(String::as_str).collect();

    records
        .iter()
        .enumerate()
        .filter_map(|(index, r)| {
            let reference = reference_names.contains(r.name.as_str());
            if !reference && !leader_names.contains(r.name.as_str()) {
                return None;
            }
            Some(Annotation {
                index,
                name: r.name.clone(),
                minutes: r.minutes,
                value: r.value(stat),
                reference,
            })
        })
        .collect()
}
