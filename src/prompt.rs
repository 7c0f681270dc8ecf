//! Instruction text for a layout.

use crate::foundation::math::Fnv1a64;
use crate::layout::model::Layout;

const SUMMARY_SLOT: &str = "{shape_summary}";

/// Instruction templates; `{shape_summary}` is replaced by the per-card summary.
pub const PROMPT_TEMPLATES: [&str; 2] = [
    "Move each colored shape card from the left staging area into its matching outline on the \
     right. Keep the camera fixed in the top-down view, move only one card at a time, and slide \
     the cards smoothly without teleportation. {shape_summary} Stop the video when every outline \
     is filled exactly.",
    "Solve the flat shape sorter puzzle exactly as shown. Starting from the unsolved first frame, \
     drag the colored cards across the board and place them into the matching outlines on the \
     right. {shape_summary} Keep the board orientation unchanged and end once all outlines are \
     packed tightly.",
];

/// Ordered card sentence, e.g. "Match the red circle card first, followed by the blue star card."
pub fn shape_summary<S: AsRef<str>>(labels: &[S]) -> String {
    let labels: Vec<&str> = labels
        .iter()
        .map(AsRef::as_ref)
        .filter(|l| !l.is_empty())
        .collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => format!("Match the {only} card to its outline."),
        [first, second] => {
            format!("Match the {first} card first, followed by the {second} card.")
        }
        [head @ .., last] => {
            format!("Match the {}, and finally the {last} card.", head.join(", "))
        }
    }
}

/// Deterministic instruction for `layout`, naming every card in move order.
pub fn compose(layout: &Layout) -> String {
    let labels: Vec<String> = layout.cards().iter().map(|c| c.pair.label()).collect();
    let template = PROMPT_TEMPLATES[template_index(layout)];
    let summary = shape_summary(&labels);
    if summary.is_empty() {
        return template.replace(&format!(" {SUMMARY_SLOT}"), "");
    }
    template.replace(SUMMARY_SLOT, &summary)
}

fn template_index(layout: &Layout) -> usize {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(layout.signature().to_string().as_bytes());
    for card in layout.cards() {
        h.write_u8(card.pair.shape as u8);
        h.write_u8(card.pair.color as u8);
    }
    (h.finish() % PROMPT_TEMPLATES.len() as u64) as usize
}

#[cfg(test)]
#[path = "../tests/unit/prompt/prompt.rs"]
mod tests;
