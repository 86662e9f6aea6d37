//! Field registries.
//!
//! One registry per instrument kind, built from the literal catalogs in
//! [`crate::fields`] on first access and read-only afterwards:
//! - [`equity()`]: shared catalog + stock-only fields
//! - [`derivative()`]: shared catalog + option-only fields
//!
//! Construction goes through `lazy_static`, so concurrent first access from
//! several threads populates each registry exactly once and no caller can
//! observe a partially built one.

mod field_registry;

pub use field_registry::FieldRegistry;

use lazy_static::lazy_static;

use crate::fields::derivative::DERIVATIVE_FIELDS;
use crate::fields::equity::EQUITY_FIELDS;
use crate::fields::shared::SHARED_FIELDS;
use crate::models::InstrumentKind;

lazy_static! {
    static ref EQUITY: FieldRegistry = build_equity();
    static ref DERIVATIVE: FieldRegistry = build_derivative();
}

fn build_equity() -> FieldRegistry {
    FieldRegistry::build(
        InstrumentKind::Equity,
        SHARED_FIELDS.iter().chain(EQUITY_FIELDS).copied(),
    )
}

fn build_derivative() -> FieldRegistry {
    FieldRegistry::build(
        InstrumentKind::Derivative,
        SHARED_FIELDS.iter().chain(DERIVATIVE_FIELDS).copied(),
    )
}

/// Registry of every field queryable for an equity.
pub fn equity() -> &'static FieldRegistry {
    &EQUITY
}

/// Registry of every field queryable for an option.
pub fn derivative() -> &'static FieldRegistry {
    &DERIVATIVE
}

/// Registry for the given instrument kind.
pub fn for_kind(kind: InstrumentKind) -> &'static FieldRegistry {
    match kind {
        InstrumentKind::Equity => equity(),
        InstrumentKind::Derivative => derivative(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{derivative as option_fields, equity as equity_fields};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_catalog_tags_are_unique() {
        // build() drops duplicates, so a size mismatch means a catalog repeats a tag
        assert_eq!(equity().len(), SHARED_FIELDS.len() + EQUITY_FIELDS.len());
        assert_eq!(derivative().len(), SHARED_FIELDS.len() + DERIVATIVE_FIELDS.len());
    }

    #[test]
    fn test_for_kind_selects_registry() {
        assert!(std::ptr::eq(for_kind(InstrumentKind::Equity), equity()));
        assert!(std::ptr::eq(for_kind(InstrumentKind::Derivative), derivative()));
        assert_eq!(equity().kind(), InstrumentKind::Equity);
        assert_eq!(derivative().kind(), InstrumentKind::Derivative);
    }

    #[test]
    fn test_derivative_embeds_shared_catalog() {
        for field in SHARED_FIELDS {
            assert_eq!(derivative().find_by_tag(field.tag()), Some(field));
            assert_eq!(equity().find_by_tag(field.tag()), Some(field));
        }
    }

    #[test]
    fn test_kind_specific_fields_stay_apart() {
        assert_eq!(equity().find_by_tag("wk52hi"), Some(&equity_fields::YEARLY_HIGH));
        assert_eq!(derivative().find_by_tag("strikeprice"), Some(&option_fields::STRIKE_PRICE));
        assert!(equity().find_by_tag("strikeprice").is_none());
        assert!(derivative().find_by_tag("beta").is_none());
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        assert!(equity().find_by_tag("ask").is_some());
        assert!(equity().find_by_tag("ASK").is_none());
        assert!(equity().find_by_tag("ask ").is_none());
        assert!(equity().find_by_tag("").is_none());
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        static BUILDS: AtomicUsize = AtomicUsize::new(0);

        // Untouched until the threads below race for it
        lazy_static! {
            static ref FRESH: FieldRegistry = {
                BUILDS.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(20));
                build_derivative()
            };
        }

        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let registry: &'static FieldRegistry = &FRESH;
                    let tags: Vec<&str> = registry.all().iter().map(|f| f.tag()).collect();
                    (registry as *const FieldRegistry as usize, tags)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);

        let addresses: HashSet<usize> = results.iter().map(|(addr, _)| *addr).collect();
        assert_eq!(addresses.len(), 1);

        let expected = SHARED_FIELDS.len() + DERIVATIVE_FIELDS.len();
        for (_, tags) in &results {
            assert_eq!(tags.len(), expected);
            assert_eq!(tags, &results[0].1);
        }
    }

    #[test]
    fn test_builders_match_singletons() {
        let tags = |registry: &FieldRegistry| -> Vec<&'static str> {
            registry.all().iter().map(|f| f.tag()).collect()
        };
        assert_eq!(tags(&build_equity()), tags(equity()));
        assert_eq!(tags(&build_derivative()), tags(derivative()));
    }

    #[test]
    fn test_concurrent_access_sees_one_registry() {
        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let registry = derivative();
                    let tags: Vec<&str> = registry.all().iter().map(|f| f.tag()).collect();
                    (registry as *const FieldRegistry as usize, tags)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let addresses: HashSet<usize> = results.iter().map(|(addr, _)| *addr).collect();
        assert_eq!(addresses.len(), 1);

        let expected = SHARED_FIELDS.len() + DERIVATIVE_FIELDS.len();
        for (_, tags) in &results {
            assert_eq!(tags.len(), expected);
            assert_eq!(tags, &results[0].1);
        }
    }
}
