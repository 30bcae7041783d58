//! Ordered lookup shared by every manifest field: the first candidate that is
//! set and non-empty wins.

/// Whether a value counts as configured. Empty strings and empty lists do not.
pub trait Present {
    fn is_present(&self) -> bool;
}

impl Present for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Present for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

pub fn first_present<'a, T, I>(candidates: I) -> Option<&'a T>
where
    T: Present + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_present())
}

/// Text field with a literal default as the last tier.
pub fn resolve_text<'a, I>(candidates: I, default: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    first_present(candidates).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_set_value_wins() {
        assert_eq!(
            first_present([None, Some("screen"), Some("demo")]),
            Some("screen")
        );
    }

    #[test]
    fn test_empty_values_fall_through() {
        assert_eq!(first_present([Some(""), None, Some("demo")]), Some("demo"));
        assert_eq!(first_present::<str, _>([Some(""), None]), None);
    }

    #[test]
    fn test_empty_lists_fall_through() {
        let screen: Vec<u32> = Vec::new();
        let demo = vec![1, 2];
        assert_eq!(
            first_present([Some(screen.as_slice()), Some(demo.as_slice())]),
            Some(&[1, 2][..])
        );
    }

    #[test]
    fn test_resolve_text_uses_default_last() {
        assert_eq!(resolve_text([None, Some("")], "Prestige"), "Prestige");
        assert_eq!(resolve_text([Some("Lobby")], "Prestige"), "Lobby");
    }
}
