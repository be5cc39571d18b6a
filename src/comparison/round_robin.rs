use serde::Serialize;

use crate::comparison::comparator::{standard_attributes, Comparator};
use crate::comparison::winner::{AttributeKind, Winner};
use crate::core::ToolRecord;

/// Which attributes each pairing is compared on.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSelection {
    /// `standard_attributes` of each pair
    Standard,
    Fixed(Vec<AttributeKind>),
}

/// Head-to-head record of one tool across every pairing.
#[derive(Debug, Clone, Serialize)]
pub struct Standing<'a> {
    pub tool: &'a ToolRecord,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Standing<'_> {
    pub fn played(&self) -> usize {
        self.wins + self.losses + self.ties
    }
}

/// Compare every pair of tools and tally who won each pairing.
///
/// A pairing goes to the tool that won more attribute rows. Standings are
/// ordered by wins descending, then losses ascending, then input order.
pub fn round_robin<'a>(tools: &[&'a ToolRecord], selection: &AttributeSelection) -> Vec<Standing<'a>> {
    let mut standings: Vec<Standing<'a>> = tools
        .iter()
        .map(|&tool| Standing {
            tool,
            wins: 0,
            losses: 0,
            ties: 0,
        })
        .collect();

    for i in 0..tools.len() {
        for j in (i + 1)..tools.len() {
            let comparator = Comparator::new(tools[i], tools[j]);
            let table = match selection {
                AttributeSelection::Standard => {
                    comparator.compare(&standard_attributes(tools[i], tools[j]))
                }
                AttributeSelection::Fixed(attributes) => comparator.compare(attributes),
            };
            match table.summary.overall() {
                Winner::A => {
                    standings[i].wins += 1;
                    standings[j].losses += 1;
                }
                Winner::B => {
                    standings[j].wins += 1;
                    standings[i].losses += 1;
                }
                Winner::Tie => {
                    standings[i].ties += 1;
                    standings[j].ties += 1;
                }
            }
        }
    }

    standings.sort_by(|x, y| y.wins.cmp(&x.wins).then(x.losses.cmp(&y.losses)));
    standings
}
