use serde::{Deserialize, Serialize};

/// One ingredient requirement contributed by a single recipe occurrence.
///
/// Lines are ephemeral: built per list request, consumed synchronously, never
/// persisted by the consolidator itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListLine {
    /// Opaque stable identifier of the ingredient, caller-assigned.
    pub ingredient_id: String,

    /// Display name. Carried through unchanged; never used for grouping or
    /// ordering.
    pub ingredient_name: String,

    /// Display name of the ingredient's catalog-assigned aisle. Used only to
    /// order output.
    pub aisle_name: String,

    /// Amount in whatever unit the catalog entry implies. Unit conversion is
    /// out of scope; lines for a given ingredient+note are assumed to share a
    /// compatible unit.
    pub quantity: f64,

    /// Optional free-text qualifier ("canned", "fresh"). `None` and `""` are
    /// the same "no note" value for grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShoppingListLine {
    /// Canonical note for grouping: absent and empty both map to `""`, any
    /// other text is taken verbatim (not trimmed, not case-folded).
    pub fn normalized_note(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// The identity key that decides which lines merge.
    pub fn group_key(&self) -> (&str, &str) {
        (self.ingredient_id.as_str(), self.normalized_note())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(note: Option<&str>) -> ShoppingListLine {
        ShoppingListLine {
            ingredient_id: "a".to_string(),
            ingredient_name: "Apples".to_string(),
            aisle_name: "Produce".to_string(),
            quantity: 1.0,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn normalized_note_collapses_none_and_empty() {
        assert_eq!(line(None).normalized_note(), "");
        assert_eq!(line(Some("")).normalized_note(), "");
        assert_eq!(line(Some("canned")).normalized_note(), "canned");
    }

    #[test]
    fn normalized_note_is_verbatim_for_text() {
        // Whitespace and case are opaque note content, not key noise.
        assert_eq!(line(Some(" Canned ")).normalized_note(), " Canned ");
        assert_ne!(
            line(Some("canned")).group_key(),
            line(Some("Canned")).group_key()
        );
    }

    #[test]
    fn group_key_pairs_ingredient_and_note() {
        assert_eq!(line(None).group_key(), ("a", ""));
        assert_eq!(line(Some("fresh")).group_key(), ("a", "fresh"));
    }
}
