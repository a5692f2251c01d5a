use std::sync::Arc;

use order_total_search::{
    FilterOptions, OrderSearchError, OrdersTable, Predicate, QueryContext, SearchFilterRegistry,
    StaticFeatures, TotalSearchHandler, i18n, register,
};

fn handler() -> Arc<TotalSearchHandler> {
    Arc::new(TotalSearchHandler::new(Arc::new(OrdersTable::new(
        "wp_wc_orders",
    ))))
}

#[test]
fn test_gate_requires_active_platform() {
    let registry = SearchFilterRegistry::new();
    let features = StaticFeatures {
        platform_active: false,
        high_performance_storage: true,
    };

    let error = register(handler(), &features, &registry).unwrap_err();
    assert_eq!(error, OrderSearchError::PlatformInactive);

    // Nothing registered: the host sees its values unchanged.
    assert!(registry.apply_options(FilterOptions::new()).is_empty());
    let predicate = registry.apply_where(
        Predicate::raw("1=0"),
        "99.99",
        "order_total",
        &QueryContext::default(),
    );
    assert_eq!(predicate, Predicate::raw("1=0"));
}

#[test]
fn test_gate_requires_high_performance_storage() {
    let registry = SearchFilterRegistry::new();
    let features = StaticFeatures {
        platform_active: true,
        high_performance_storage: false,
    };

    let error = register(handler(), &features, &registry).unwrap_err();
    assert_eq!(error, OrderSearchError::HighPerformanceStorageDisabled);
    assert_eq!(registry.options_filter_count(), 0);
    assert_eq!(registry.where_filter_count(), 0);
}

#[test]
fn test_platform_check_runs_before_storage_check() {
    let registry = SearchFilterRegistry::new();
    let features = StaticFeatures::default();

    let error = register(handler(), &features, &registry).unwrap_err();
    assert_eq!(error, OrderSearchError::PlatformInactive);
}

#[test]
fn test_notice_text_is_admin_readable() {
    let handler = handler();
    let notice = handler.notice(&OrderSearchError::HighPerformanceStorageDisabled);
    assert!(notice.contains("high-performance order storage"));
}

#[test]
fn test_notice_text_is_translatable() {
    let catalog = i18n::MessageCatalog::from_json(
        r#"{"platform_missing_notice": "La plateforme e-commerce est requise."}"#,
    )
    .unwrap();
    let handler = Arc::new(
        TotalSearchHandler::new(Arc::new(OrdersTable::new("wp_wc_orders"))).with_catalog(catalog),
    );

    let notice = handler.notice(&OrderSearchError::PlatformInactive);
    assert_eq!(notice, "La plateforme e-commerce est requise.");
}

#[test]
fn test_successful_registration_is_idempotent_per_call() {
    // Registering twice installs two callback pairs; the duplicate-entry
    // policy on FilterOptions still collapses the dropdown to one entry.
    let registry = SearchFilterRegistry::new();
    register(handler(), &StaticFeatures::all_enabled(), &registry).unwrap();
    register(handler(), &StaticFeatures::all_enabled(), &registry).unwrap();

    assert_eq!(registry.options_filter_count(), 2);
    let options = registry.apply_options(FilterOptions::new());
    assert_eq!(options.len(), 1);
}
