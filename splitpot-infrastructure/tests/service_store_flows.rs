use splitpot_application::{CurrencyCode, SplitId, SplitService, SplitStore};
use splitpot_domain::Contributor;
use splitpot_infrastructure::{JsonSplitStore, MemorySplitStore};
use std::sync::atomic::{AtomicU64, Ordering};

static DIR_SEQ: AtomicU64 = AtomicU64::new(0);

fn scratch_dir() -> std::path::PathBuf {
    let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("splitpot-flow-{}-{seq}", std::process::id()))
}

fn trip() -> Vec<Contributor> {
    vec![
        Contributor::new("Alice", 90.0),
        Contributor::new("Bob", 0.0),
        Contributor::new("Carol", 30.0),
    ]
}

#[test]
fn memory_store_keeps_settlements_current() {
    let store = MemorySplitStore::new();
    let service = SplitService::new(&store);
    let id = SplitId::new("trip");

    service
        .import_split(id.clone(), CurrencyCode::default(), trip())
        .expect("import should succeed");

    let split = service
        .add_contribution(&id, "Dave", 0.0)
        .expect("add should succeed");
    // 90/0/30/0: fair share 30, Alice is owed 30 each by Bob and Dave.
    assert_eq!(split.settlements.len(), 2);
    let report = service.review(&id).expect("review should succeed");
    assert_eq!(report.fair_share, 30.0);
    assert_eq!(report.transfers, split.settlements);
}

#[test]
fn json_store_survives_reopen() {
    let dir = scratch_dir();
    let id = SplitId::new("weekend");

    {
        let store = JsonSplitStore::open(&dir).expect("open should succeed");
        let service = SplitService::new(&store);
        service
            .import_split(id.clone(), CurrencyCode::new("EUR"), trip())
            .expect("import should succeed");
    }

    let reopened = JsonSplitStore::open(&dir).expect("reopen should succeed");
    let split = reopened
        .load(&id)
        .expect("load should succeed")
        .expect("record should persist across instances");
    assert_eq!(split.currency, CurrencyCode::new("EUR"));
    assert_eq!(split.contributors, trip());
    assert_eq!(split.settlements.len(), 2);
    assert_eq!(
        reopened.list_ids().expect("list should succeed"),
        vec![id.clone()]
    );

    let service = SplitService::new(&reopened);
    let split = service
        .remove_contribution(&id, "alice")
        .expect("remove should succeed");
    // 0/30 remaining: Alice's removal flips Carol into the creditor seat.
    assert_eq!(split.settlements.len(), 1);
    assert_eq!(split.settlements[0].from, "Bob");
    assert_eq!(split.settlements[0].to, "Carol");
    assert_eq!(split.settlements[0].amount, 15.0);

    let _ = std::fs::remove_dir_all(&dir);
}
