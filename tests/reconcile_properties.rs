// tests/reconcile_properties.rs
mod common;

use common::{ctx, MockScraper};
use fundamentals_collector::record::QUOTA_EXHAUSTED;
use fundamentals_collector::sources::{fundamentus, statusinvest};
use fundamentals_collector::{
    reconcile_ticker, FetchError, FieldRecord, FieldValue, RawField, Scope, SourceScraper,
};

fn cached_petr4(si_stamp: &str) -> FieldRecord {
    let mut rec = FieldRecord::new("PETR4");
    rec.insert("atualizado_em", "2026-03-01 08:00:00");
    rec.insert("statusInvest_pl", 3.9);
    rec.insert("statusInvest_dy_percentual", 14.2);
    rec.insert("statusInvest_erro", "");
    rec.insert("statusInvest_data_atualizacao", si_stamp);
    rec.insert("fundamentus_pl", 4.1);
    rec.insert("fundamentus_setor", "Petróleo");
    rec.insert("fundamentus_erro", "");
    rec
}

fn si_raw() -> Vec<RawField> {
    vec![
        RawField::text("P/L", "5,5"),
        RawField::text("Dividend Yield", "9,1%"),
    ]
}

fn fund_raw() -> Vec<RawField> {
    vec![
        RawField::text("P/L", "6,2"),
        RawField::text("Setor", "Petróleo, Gás e Biocombustíveis"),
    ]
}

#[tokio::test]
async fn fresh_gated_group_is_carried_forward() {
    let si = MockScraper::new(&statusinvest::SCHEMA, si_raw());
    let si_calls = si.calls();
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![
        Box::new(si),
        Box::new(MockScraper::new(&fundamentus::SCHEMA, fund_raw())),
    ];
    let cached = cached_petr4("2026-03-18 09:00:00");
    let mut c = ctx();

    let out = reconcile_ticker("PETR4", Some(&cached), &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();

    assert!(si_calls.lock().unwrap().is_empty());
    assert_eq!(out.get("statusInvest_pl"), Some(&FieldValue::Float(3.9)));
    assert_eq!(
        out.get("statusInvest_data_atualizacao"),
        Some(&FieldValue::from("2026-03-18 09:00:00"))
    );
    // Keys the cache lacked are filled with null.
    assert_eq!(out.get("statusInvest_pvp"), Some(&FieldValue::Null));
    // Ungated source refreshed.
    assert_eq!(out.get("fundamentus_pl"), Some(&FieldValue::Float(6.2)));
    assert_eq!(
        out.get("atualizado_em"),
        Some(&FieldValue::from("2026-03-20 10:00:00"))
    );
}

#[tokio::test]
async fn stale_gated_group_is_fetched() {
    let si = MockScraper::new(&statusinvest::SCHEMA, si_raw());
    let si_calls = si.calls();
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![Box::new(si)];
    let cached = cached_petr4("2026-03-10");
    let mut c = ctx();

    let out = reconcile_ticker("PETR4", Some(&cached), &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();

    assert_eq!(*si_calls.lock().unwrap(), vec!["PETR4".to_string()]);
    assert_eq!(out.get("statusInvest_pl"), Some(&FieldValue::Float(5.5)));
    assert_eq!(
        out.get("statusInvest_data_atualizacao"),
        Some(&FieldValue::from("2026-03-20 10:00:00"))
    );
    // Every schema key is present.
    for key in statusinvest::SCHEMA.field_keys() {
        assert!(out.contains_key(&key), "missing {key}");
    }
}

#[tokio::test]
async fn exhaustion_is_sticky_across_tickers() {
    let si = MockScraper::new(&statusinvest::SCHEMA, si_raw())
        .answer("PETR4", Err(FetchError::QuotaExhausted));
    let si_calls = si.calls();
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![Box::new(si)];
    let mut c = ctx();

    let first = reconcile_ticker("PETR4", None, &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();
    assert_eq!(
        first.get("statusInvest_erro"),
        Some(&FieldValue::from(QUOTA_EXHAUSTED))
    );

    let mut vale = FieldRecord::new("VALE3");
    vale.insert("statusInvest_pl", 7.0);
    vale.insert("statusInvest_erro", "");
    let second = reconcile_ticker("VALE3", Some(&vale), &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();
    let third = reconcile_ticker("ITSA4", None, &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();

    assert_eq!(*si_calls.lock().unwrap(), vec!["PETR4".to_string()]);
    assert_eq!(second.get("statusInvest_pl"), Some(&FieldValue::Float(7.0)));
    assert_eq!(third.get("statusInvest_pl"), Some(&FieldValue::Null));
    assert_eq!(third.get("statusInvest_erro"), Some(&FieldValue::from("")));

    // A new run starts clean.
    let mut next = ctx();
    assert!(!next.is_exhausted("statusInvest"));
    reconcile_ticker("ITSA4", None, &Scope::Full, &scrapers, &mut next)
        .await
        .unwrap();
    assert_eq!(si_calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn source_error_does_not_abort_other_sources() {
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![
        Box::new(
            MockScraper::new(&statusinvest::SCHEMA, si_raw())
                .answer("PETR4", Err(FetchError::Source("timeout".into()))),
        ),
        Box::new(MockScraper::new(&fundamentus::SCHEMA, fund_raw())),
    ];
    let mut c = ctx();
    let out = reconcile_ticker("PETR4", None, &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();

    let err = out.get("statusInvest_erro").and_then(FieldValue::as_str).unwrap();
    assert!(err.contains("timeout"));
    assert_eq!(out.get("statusInvest_pl"), Some(&FieldValue::Null));
    assert_eq!(out.get("fundamentus_pl"), Some(&FieldValue::Float(6.2)));
    assert_eq!(out.get("fundamentus_erro"), Some(&FieldValue::from("")));
}

#[tokio::test]
async fn single_source_leaves_other_groups_identical() {
    let fund = MockScraper::new(&fundamentus::SCHEMA, fund_raw());
    let si = MockScraper::new(&statusinvest::SCHEMA, si_raw());
    let si_calls = si.calls();
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![Box::new(si), Box::new(fund)];

    let mut cached = cached_petr4("2026-03-19");
    cached.insert("fundamentus_old_key", 1i64);
    let mut c = ctx();
    // Exhaustion of another source does not block the refresh.
    c.mark_exhausted("statusInvest");

    let out = reconcile_ticker(
        "PETR4",
        Some(&cached),
        &Scope::SingleSource("fundamentus".into()),
        &scrapers,
        &mut c,
    )
    .await
    .unwrap();

    assert!(si_calls.lock().unwrap().is_empty());
    for (k, v) in cached.iter() {
        if !k.starts_with("fundamentus_") && k != "atualizado_em" {
            assert_eq!(out.get(k), Some(v), "{k} changed");
        }
    }
    assert!(!out.contains_key("fundamentus_old_key"));
    assert_eq!(out.get("fundamentus_pl"), Some(&FieldValue::Float(6.2)));
    assert_eq!(
        out.get("atualizado_em"),
        Some(&FieldValue::from("2026-03-20 10:00:00"))
    );
}

#[tokio::test]
async fn single_source_without_cache_starts_from_ticker() {
    let scrapers: Vec<Box<dyn SourceScraper>> =
        vec![Box::new(MockScraper::new(&fundamentus::SCHEMA, fund_raw()))];
    let mut c = ctx();
    let out = reconcile_ticker(
        "WEGE3",
        None,
        &Scope::SingleSource("FUNDAMENTUS".into()),
        &scrapers,
        &mut c,
    )
    .await
    .unwrap();
    assert_eq!(out.ticker(), Some("WEGE3"));
    assert!(out.iter().all(|(k, _)| k == "ticker"
        || k == "atualizado_em"
        || k.starts_with("fundamentus_")));
}

#[tokio::test]
async fn single_source_exhaustion_keeps_cached_group_for_the_run() {
    let si = MockScraper::new(&statusinvest::SCHEMA, si_raw())
        .answer("PETR4", Err(FetchError::QuotaExhausted));
    let si_calls = si.calls();
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![Box::new(si)];
    let scope = Scope::SingleSource("statusInvest".into());
    let mut c = ctx();

    let cached = cached_petr4("2026-03-19 09:00:00");
    let out = reconcile_ticker("PETR4", Some(&cached), &scope, &scrapers, &mut c)
        .await
        .unwrap();
    assert!(c.is_exhausted("statusInvest"));
    assert_eq!(out.get("statusInvest_pl"), Some(&FieldValue::Float(3.9)));
    assert_eq!(out.get("statusInvest_erro"), Some(&FieldValue::from("")));
    assert_eq!(
        out.get("statusInvest_data_atualizacao"),
        Some(&FieldValue::from("2026-03-19 09:00:00"))
    );

    // Later tickers in the run keep their cached group without a fetch.
    let mut vale = FieldRecord::new("VALE3");
    vale.insert("statusInvest_pl", 7.0);
    vale.insert("statusInvest_erro", "");
    let second = reconcile_ticker("VALE3", Some(&vale), &scope, &scrapers, &mut c)
        .await
        .unwrap();
    assert_eq!(*si_calls.lock().unwrap(), vec!["PETR4".to_string()]);
    assert_eq!(second.get("statusInvest_pl"), Some(&FieldValue::Float(7.0)));
    assert_eq!(second.get("statusInvest_pvp"), Some(&FieldValue::Null));
}

#[tokio::test]
async fn full_scope_output_starts_with_ticker_and_ends_with_timestamp() {
    let scrapers: Vec<Box<dyn SourceScraper>> = vec![
        Box::new(MockScraper::new(&statusinvest::SCHEMA, si_raw())),
        Box::new(MockScraper::new(&fundamentus::SCHEMA, fund_raw())),
    ];
    let cached = cached_petr4("2026-03-01");
    let mut c = ctx();
    let out = reconcile_ticker("PETR4", Some(&cached), &Scope::Full, &scrapers, &mut c)
        .await
        .unwrap();

    let keys: Vec<&str> = out.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys.first(), Some(&"ticker"));
    assert_eq!(keys.last(), Some(&"atualizado_em"));
    let first_fund = keys.iter().position(|k| k.starts_with("fundamentus_")).unwrap();
    let last_si = keys.iter().rposition(|k| k.starts_with("statusInvest_")).unwrap();
    assert!(last_si < first_fund, "groups follow scraper order");
}
