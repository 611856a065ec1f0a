#[cfg(test)]
mod tests {
    use crate::errors::SyncError;
    use crate::kind::DataKind;
    use crate::pagination::Paginator;

    #[test]
    fn test_fresh_state_is_page_one() {
        let paginator = Paginator::new();
        assert_eq!(paginator.page(DataKind::Orders), 1);
        assert_eq!(paginator.cursor_for(DataKind::Orders, 1).unwrap(), None);
        assert!(!paginator.state(DataKind::Orders).unwrap().has_more);
    }

    #[test]
    fn test_non_paginated_kind_rejected() {
        let paginator = Paginator::new();
        let err = paginator.state(DataKind::Balance).unwrap_err();
        assert!(matches!(err, SyncError::NotPaginated { .. }));
    }

    #[test]
    fn test_advance_records_cursor() {
        let mut paginator = Paginator::new();
        let page = paginator
            .advance(DataKind::Orders, Some("X123".to_string()))
            .unwrap();
        assert_eq!(page, 2);
        assert_eq!(
            paginator.cursor_for(DataKind::Orders, 2).unwrap(),
            Some("X123".to_string())
        );
        // page 1 is still cursorless
        assert_eq!(paginator.cursor_for(DataKind::Orders, 1).unwrap(), None);
    }

    #[test]
    fn test_retreat_then_readvance_reuses_cursor() {
        let mut paginator = Paginator::new();
        paginator
            .advance(DataKind::Bills, Some("A".to_string()))
            .unwrap();
        paginator
            .advance(DataKind::Bills, Some("B".to_string()))
            .unwrap();
        assert_eq!(paginator.page(DataKind::Bills), 3);

        assert_eq!(paginator.retreat(DataKind::Bills).unwrap(), 2);
        assert_eq!(paginator.retreat(DataKind::Bills).unwrap(), 1);
        // cursor for page 1 is null after stepping all the way back, not "A"
        assert_eq!(paginator.cursor_for(DataKind::Bills, 1).unwrap(), None);
        assert_eq!(
            paginator.cursor_for(DataKind::Bills, 2).unwrap(),
            Some("A".to_string())
        );
    }

    #[test]
    fn test_retreat_below_page_one_fails() {
        let mut paginator = Paginator::new();
        let err = paginator.retreat(DataKind::Orders).unwrap_err();
        assert!(matches!(err, SyncError::PageOutOfRange { .. }));
    }

    #[test]
    fn test_cursor_for_unvisited_page_fails() {
        let paginator = Paginator::new();
        let err = paginator.cursor_for(DataKind::Orders, 3).unwrap_err();
        assert!(matches!(err, SyncError::PageOutOfRange { .. }));
    }

    #[test]
    fn test_readvance_overwrites_stale_cursor() {
        let mut paginator = Paginator::new();
        paginator
            .advance(DataKind::Orders, Some("old".to_string()))
            .unwrap();
        paginator.retreat(DataKind::Orders).unwrap();
        paginator
            .advance(DataKind::Orders, Some("new".to_string()))
            .unwrap();
        assert_eq!(
            paginator.cursor_for(DataKind::Orders, 2).unwrap(),
            Some("new".to_string())
        );
    }

    #[test]
    fn test_reset_clears_stack() {
        let mut paginator = Paginator::new();
        paginator
            .advance(DataKind::PositionHistory, Some("C1".to_string()))
            .unwrap();
        paginator.set_has_more(DataKind::PositionHistory, true).unwrap();
        paginator.reset(DataKind::PositionHistory);

        assert_eq!(paginator.page(DataKind::PositionHistory), 1);
        assert!(!paginator.state(DataKind::PositionHistory).unwrap().has_more);
        assert!(paginator.cursor_for(DataKind::PositionHistory, 2).is_err());
    }

    #[test]
    fn test_reset_all() {
        let mut paginator = Paginator::new();
        paginator.advance(DataKind::Orders, None).unwrap();
        paginator.advance(DataKind::Bills, None).unwrap();
        paginator.reset_all();
        assert_eq!(paginator.page(DataKind::Orders), 1);
        assert_eq!(paginator.page(DataKind::Bills), 1);
    }
}
