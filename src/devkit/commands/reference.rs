use crate::commands::CmdResult;
use crate::error::Result;
use crate::reference::{self, Locale};

/// Every structure, sorted by name.
pub fn list(locale: Locale) -> Result<CmdResult> {
    let entries = reference::entries()
        .into_iter()
        .map(|entry| entry.localized(locale))
        .collect();
    Ok(CmdResult::default().with_entries(entries))
}

pub fn show(name: &str, locale: Locale) -> Result<CmdResult> {
    let entry = reference::describe(name)?;
    Ok(CmdResult::default().with_entries(vec![entry.localized(locale)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevkitError;

    #[test]
    fn test_list_is_sorted() {
        let result = list(Locale::En).unwrap();
        let names: Vec<_> = result.entries.iter().map(|e| e.name).collect();
        assert_eq!(names, reference::names());
    }

    #[test]
    fn test_show_single_entry() {
        let result = show("map", Locale::Zh).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert!(result.entries[0].description.contains("关联容器"));
        assert!(result.entries[0]
            .operations
            .iter()
            .any(|op| op.signature == "find(key)"));
    }

    #[test]
    fn test_show_unknown() {
        assert!(matches!(
            show("queue", Locale::En),
            Err(DevkitError::StructureNotFound(_))
        ));
    }
}
