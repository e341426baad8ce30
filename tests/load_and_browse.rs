use estate_tracker::compare::ComparisonTable;
use estate_tracker::engine::{Filters, ListingEngine, SortKey, SortOrder, ViewIntent, ViewState};
use estate_tracker::sources::{self, GeneratorParams, LoadState, SourceKind};

async fn loaded_engine(count: usize, page_size: usize) -> ListingEngine {
    let source = sources::build(&SourceKind::Mock(GeneratorParams { count, seed: 2024 })).unwrap();
    let state = sources::load(source.as_ref()).await;
    assert!(!state.is_loading());
    let records = state.into_records().expect("mock source always loads");
    ListingEngine::new(records, ViewState::with_page_size(page_size))
}

#[tokio::test]
async fn browses_a_generated_listing() {
    let mut engine = loaded_engine(50, 12).await;

    let view = engine.view();
    assert_eq!(view.total_matched, 50);
    assert_eq!(view.total_pages, 5);
    assert_eq!(view.items.len(), 12);

    engine.apply(ViewIntent::Page(5));
    assert_eq!(engine.view().items.len(), 2);

    engine.apply(ViewIntent::Sort {
        key: SortKey::Price,
        order: SortOrder::Descending,
    });
    let view = engine.view();
    assert_eq!(view.current_page, 1);
    assert!(view.items.windows(2).all(|w| w[0].price >= w[1].price));
}

#[tokio::test]
async fn filters_narrow_the_generated_listing() {
    let mut engine = loaded_engine(80, 10).await;

    engine.apply(ViewIntent::Filter(Filters::from_inputs(
        "Goa", "any", "villa", "", "6000000",
    )));
    let view = engine.view();
    for record in &view.items {
        assert_eq!(record.city, "Goa");
        assert_eq!(record.property_type.as_deref(), Some("villa"));
        assert!(record.price <= 6_000_000.0);
    }
    assert!(view.total_matched <= 80);
}

#[tokio::test]
async fn compares_records_from_the_current_page() {
    let engine = loaded_engine(10, 12).await;
    let ids: Vec<String> = engine.view().items.iter().take(3).map(|r| r.id.clone()).collect();

    let table = ComparisonTable::build(engine.records(), ids.as_slice());
    assert_eq!(table.rows.len(), 3);
    let cheapest = table.cheapest.clone().unwrap();
    let cheapest_price = table.rows.iter().find(|r| r.id == cheapest).unwrap().price;
    assert!(table.rows.iter().all(|r| r.price >= cheapest_price));
}

#[tokio::test]
async fn unreachable_api_is_a_failed_load() {
    let source = sources::build(&SourceKind::Remote(sources::RemoteParams {
        base_url: "http://127.0.0.1:9".into(),
        timeout: std::time::Duration::from_secs(2),
    }))
    .unwrap();
    let state = sources::load(source.as_ref()).await;
    assert!(matches!(state, LoadState::Failed(_)));
}
