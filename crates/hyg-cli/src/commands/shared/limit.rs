/// Row limit for a listing: the subcommand's `--limit`, then the global one,
/// then the configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: usize) -> usize {
    local
        .or(global)
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn journal_list_limit_beats_global() {
        assert_eq!(effective_limit(Some(5), Some(10), 50), 5);
    }

    #[test]
    fn history_uses_global_limit() {
        assert_eq!(effective_limit(None, Some(10), 50), 10);
    }

    #[test]
    fn configured_default_applies_otherwise() {
        assert_eq!(effective_limit(None, None, 50), 50);
    }
}
