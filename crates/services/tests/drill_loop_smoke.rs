use drill_core::model::{CardDraft, SetId};
use drill_core::time::fixed_clock;
use services::{SessionEngine, Verdict};
use sources::{InMemorySource, SetCatalog};

#[tokio::test]
async fn full_drill_loop_over_a_source() {
    let source = InMemorySource::new();
    let animals = SetId::new("animals").unwrap();
    source
        .insert_set(
            animals.clone(),
            vec![
                CardDraft::new("dog", "perro"),
                CardDraft::new("cat", "gato"),
            ],
        )
        .unwrap();

    let catalog = source.list_sets().await.unwrap();
    assert_eq!(catalog, vec![animals.clone()]);

    let mut engine = SessionEngine::new(fixed_clock());
    engine.select_set(animals, &source).await.unwrap();

    // First card answered correctly; host may advance immediately.
    assert!(engine.check_answer("perro").unwrap().is_correct());
    let stats = engine.stats().unwrap();
    assert_eq!((stats.total, stats.learned), (2, 1));
    engine.advance().unwrap();

    // Second card answered wrongly; the verdict shows the expected answer
    // and the learner stays on the card until they move on.
    assert_eq!(engine.current_card().unwrap().prompt(), "cat");
    assert_eq!(
        engine.check_answer("dog").unwrap(),
        Verdict::Incorrect {
            expected: "gato".to_owned()
        }
    );
    assert_eq!(engine.current_card().unwrap().prompt(), "cat");
    engine.advance().unwrap();

    // Wrapped back to the first card.
    assert_eq!(engine.current_card().unwrap().prompt(), "dog");

    let stats = engine.stats().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.learned, 1);
    assert_eq!(stats.missed, 1);
    assert_eq!(stats.answered, 2);
}

#[tokio::test]
async fn overlapping_selects_resolve_last_write_wins() {
    let source = InMemorySource::new();
    let animals = SetId::new("animals").unwrap();
    let colors = SetId::new("colors").unwrap();
    source
        .insert_set(animals.clone(), vec![CardDraft::new("dog", "perro")])
        .unwrap();
    source
        .insert_set(colors.clone(), vec![CardDraft::new("red", "rojo")])
        .unwrap();

    let mut engine = SessionEngine::new(fixed_clock());

    // Simulate the first select still being in flight when the second starts.
    use sources::SetSource;
    let first = engine.begin_load(animals.clone());
    let first_payload = source.fetch_set(&animals).await;
    let second = engine.begin_load(colors.clone());
    let second_payload = source.fetch_set(&colors).await;

    engine.complete_load(second, second_payload).unwrap();
    assert!(engine.complete_load(first, first_payload).is_err());

    assert_eq!(engine.active_set(), Some(&colors));
    assert_eq!(engine.current_card().unwrap().prompt(), "red");
}
