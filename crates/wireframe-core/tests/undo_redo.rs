use wireframe_core::{
    Command, CommandResult, MemoryActivationStore, PageModel, PageNode, SessionConfig,
    WireframeSession,
};

fn ready_session(page: PageModel) -> WireframeSession {
    let mut session = WireframeSession::new(page);
    session.initialize(&MemoryActivationStore::new(), "test-page");
    session
}

#[test]
fn test_text_scenario_undo_redo() {
    let mut page = PageModel::new();
    let p = page.insert(PageNode::text("p", "Hello"));
    let mut session = ready_session(page);

    session.execute(Command::Toggle { enabled: true }).unwrap();
    session.execute(Command::Select { handle: p }).unwrap();

    let placeholder = session.page().node(p).unwrap().text_content().to_string();
    let short_pool = [
        "Sample paragraph text",
        "Content description here",
        "Placeholder text content",
    ];
    assert!(short_pool.contains(&placeholder.as_str()));

    session.execute(Command::Undo).unwrap();
    assert_eq!(session.page().node(p).unwrap().text_content(), "Hello");
    assert!(!session.page().markers(p).modified);

    session.execute(Command::Redo).unwrap();
    assert_eq!(session.page().node(p).unwrap().text_content(), placeholder);
    assert!(session.page().markers(p).modified);
}

#[test]
fn test_round_trip_law_over_distinct_handles() {
    let mut page = PageModel::new();
    let handles: Vec<_> = (0..5)
        .map(|i| page.insert(PageNode::text("p", format!("original {}", i))))
        .collect();
    let mut session = ready_session(page);
    session.execute(Command::Toggle { enabled: true }).unwrap();

    for &handle in &handles {
        assert_eq!(
            session.execute(Command::Select { handle }).unwrap(),
            CommandResult::Applied { records: 1 }
        );
    }
    let after_applies = session.page().text_contents();

    for _ in 0..handles.len() {
        assert_eq!(
            session.execute(Command::Undo).unwrap(),
            CommandResult::Success
        );
    }
    for (i, &handle) in handles.iter().enumerate() {
        assert_eq!(
            session.page().node(handle).unwrap().text_content(),
            format!("original {}", i)
        );
    }

    for _ in 0..handles.len() {
        assert_eq!(
            session.execute(Command::Redo).unwrap(),
            CommandResult::Success
        );
    }
    // Undo N then redo N lands exactly back on the post-apply content.
    assert_eq!(session.page().text_contents(), after_applies);
}

#[test]
fn test_undo_redo_are_noops_at_the_boundaries() {
    let mut page = PageModel::new();
    let p = page.insert(PageNode::text("p", "Hello"));
    let mut session = ready_session(page);
    session.execute(Command::Toggle { enabled: true }).unwrap();

    assert_eq!(session.execute(Command::Undo).unwrap(), CommandResult::Ignored);
    assert_eq!(session.execute(Command::Redo).unwrap(), CommandResult::Ignored);

    session.execute(Command::Select { handle: p }).unwrap();
    session.execute(Command::Undo).unwrap();
    assert_eq!(session.execute(Command::Undo).unwrap(), CommandResult::Ignored);
}

#[test]
fn test_history_capacity_invariant() {
    let mut page = PageModel::new();
    let p = page.insert(PageNode::text("p", "v0"));
    let mut session = ready_session(page);
    session.execute(Command::Toggle { enabled: true }).unwrap();

    // 60 re-modifications of the same element.
    for _ in 0..60 {
        session.execute(Command::Select { handle: p }).unwrap();
    }
    let status = session.status();
    assert!(status.undo_depth <= 50);
    assert_eq!(status.undo_depth, 50);

    // Every surviving entry is undoable; the walk ends at a state reachable purely from the
    // stack contents (eviction may have dropped enough history to outlive the undos, so this
    // is not necessarily the true original).
    let mut undone = 0;
    while session.execute(Command::Undo).unwrap() == CommandResult::Success {
        undone += 1;
    }
    assert_eq!(undone, 50);
    // The snapshot store still knows the true original regardless of eviction.
    assert_eq!(session.snapshots().original_of(p).unwrap().original, "v0");
}

#[test]
fn test_undo_of_detached_element_does_not_corrupt_cursor() {
    let mut page = PageModel::new();
    let kept = page.insert(PageNode::text("p", "kept"));
    let gone = page.insert(PageNode::text("p", "gone"));
    let mut session = ready_session(page);
    session.execute(Command::Toggle { enabled: true }).unwrap();

    session.execute(Command::Select { handle: kept }).unwrap();
    session.execute(Command::Select { handle: gone }).unwrap();
    session.page_mut().detach(gone);

    // First undo targets the vanished element: the stack still retreats.
    assert_eq!(session.execute(Command::Undo).unwrap(), CommandResult::Success);
    // Second undo reaches the surviving element.
    assert_eq!(session.execute(Command::Undo).unwrap(), CommandResult::Success);
    assert_eq!(session.page().node(kept).unwrap().text_content(), "kept");
    assert!(!session.status().can_undo);
}

#[test]
fn test_new_edit_truncates_redo_branch() {
    let mut page = PageModel::new();
    let p = page.insert(PageNode::text("p", "Hello"));
    let mut session = ready_session(page);
    session.execute(Command::Toggle { enabled: true }).unwrap();

    session.execute(Command::Select { handle: p }).unwrap();
    session.execute(Command::Select { handle: p }).unwrap();
    session.execute(Command::Undo).unwrap();
    assert!(session.status().can_redo);

    // A fresh edit abandons the redo branch.
    session.execute(Command::Select { handle: p }).unwrap();
    assert!(!session.status().can_redo);
    assert_eq!(session.status().undo_depth, 2);
}

#[test]
fn test_custom_history_capacity() {
    let mut page = PageModel::new();
    let p = page.insert(PageNode::text("p", "v0"));
    let mut session = WireframeSession::with_config(
        page,
        SessionConfig {
            history_capacity: 5,
            ..SessionConfig::default()
        },
    );
    session.initialize(&MemoryActivationStore::new(), "test-page");
    session.execute(Command::Toggle { enabled: true }).unwrap();

    for _ in 0..10 {
        session.execute(Command::Select { handle: p }).unwrap();
    }
    assert_eq!(session.status().undo_depth, 5);
}
