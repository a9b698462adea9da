/// Tag opening the structured ingredient block the prompt asks the model for.
pub const START_TAG: &str = "[JSON-START]";
/// Tag closing the structured ingredient block.
pub const END_TAG: &str = "[JSON-END]";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("response contains no {START_TAG} tag")]
    MissingStart,
    #[error("response contains no {END_TAG} tag after {START_TAG}")]
    MissingEnd,
}

/// The delimited block a recipe response is expected to carry, plus the
/// prose that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPayload<'a> {
    /// Text strictly between the first start tag and the first end tag after
    /// it, trimmed. Not yet validated as JSON.
    pub payload: &'a str,
    /// Everything after the last end tag, trimmed. Displayed verbatim.
    pub recipe_text: &'a str,
}

impl<'a> TaggedPayload<'a> {
    /// Scan a raw model response for the tagged block. No partial recovery:
    /// a missing tag fails the whole extraction.
    pub fn extract(response: &'a str) -> Result<Self, ExtractError> {
        let start = response.find(START_TAG).ok_or(ExtractError::MissingStart)?;
        let after_start = start + START_TAG.len();
        let end = response[after_start..]
            .find(END_TAG)
            .map(|offset| after_start + offset)
            .ok_or(ExtractError::MissingEnd)?;
        let payload = response[after_start..end].trim();

        // Models occasionally repeat the tag pair, or restate the tags inside
        // the prose. The recipe is whatever follows the final end tag.
        let body_start = response
            .rfind(END_TAG)
            .map(|offset| offset + END_TAG.len())
            .unwrap_or(response.len());
        let recipe_text = response[body_start..].trim();

        Ok(Self { payload, recipe_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_payload_and_recipe_body() {
        let response = "preamble\n[JSON-START]\n[{\"ingredient_name\": \"paneer\", \"quantity_grams\": 200}]\n[JSON-END]\n\nPalak Paneer\nStep 1: ...";
        let tagged = TaggedPayload::extract(response).unwrap();
        assert_eq!(
            tagged.payload,
            "[{\"ingredient_name\": \"paneer\", \"quantity_grams\": 200}]"
        );
        assert_eq!(tagged.recipe_text, "Palak Paneer\nStep 1: ...");
    }

    #[test]
    fn first_tag_pair_supplies_the_payload() {
        let response = "[JSON-START] first [JSON-END] middle [JSON-START] second [JSON-END] recipe";
        let tagged = TaggedPayload::extract(response).unwrap();
        assert_eq!(tagged.payload, "first");
        // The body follows the last end tag even when several pairs appear.
        assert_eq!(tagged.recipe_text, "recipe");
    }

    #[test]
    fn missing_start_tag_fails() {
        let response = "[ {\"ingredient_name\": \"paneer\"} ] [JSON-END] recipe";
        assert_eq!(
            TaggedPayload::extract(response),
            Err(ExtractError::MissingStart)
        );
    }

    #[test]
    fn missing_end_tag_fails() {
        let response = "[JSON-START] [ {\"ingredient_name\": \"paneer\"} ] recipe without end";
        assert_eq!(
            TaggedPayload::extract(response),
            Err(ExtractError::MissingEnd)
        );
    }

    #[test]
    fn end_tag_before_start_tag_does_not_count() {
        let response = "[JSON-END] stray [JSON-START] payload without terminator";
        assert_eq!(
            TaggedPayload::extract(response),
            Err(ExtractError::MissingEnd)
        );
    }

    #[test]
    fn empty_body_after_end_tag_is_allowed() {
        let response = "[JSON-START][][JSON-END]";
        let tagged = TaggedPayload::extract(response).unwrap();
        assert_eq!(tagged.payload, "[]");
        assert_eq!(tagged.recipe_text, "");
    }
}
