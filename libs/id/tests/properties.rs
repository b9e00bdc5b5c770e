//! Property tests for the resource ID codec.

use azrm_id::{
    AppServiceEnvironmentId, CapacityId, Casing, ExpressRouteAuthorizationId, FlowLogId, IdKind,
    NetworkWatcherId, PrivateCloudClusterId, PrivateCloudId, ResourceId, Segment, KINDS,
};
use proptest::prelude::*;

/// A non-empty value segment: anything without a separator.
fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.(){}-]{1,24}"
}

fn capacity_id() -> impl Strategy<Value = CapacityId> {
    (value(), value(), value()).prop_map(|(s, rg, name)| CapacityId::new(s, rg, name))
}

fn flow_log_id() -> impl Strategy<Value = FlowLogId> {
    (value(), value(), value(), value())
        .prop_map(|(s, rg, watcher, log)| FlowLogId::new(s, rg, watcher, log))
}

fn cluster_id() -> impl Strategy<Value = PrivateCloudClusterId> {
    (value(), value(), value(), value())
        .prop_map(|(s, rg, cloud, cluster)| PrivateCloudClusterId::new(s, rg, cloud, cluster))
}

fn express_route_authorization_id() -> impl Strategy<Value = ExpressRouteAuthorizationId> {
    (value(), value(), value(), value()).prop_map(|(s, rg, cloud, auth)| {
        ExpressRouteAuthorizationId::new(s, rg, cloud, auth)
    })
}

/// Any registered kind, with one value per value segment.
fn kind_with_values() -> impl Strategy<Value = (IdKind, Vec<String>)> {
    prop::sample::select(KINDS).prop_flat_map(|kind| {
        (
            Just(kind),
            prop::collection::vec(value(), kind.value_count()),
        )
    })
}

fn case_mask() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..64)
}

/// Re-cases only the fixed segments of `path`, driven by `mask`.
fn recase_literals(segments: &[Segment], path: &str, mask: &[bool]) -> String {
    let mut bits = mask.iter().cycle();
    let components = path.trim_start_matches('/').split('/');

    let mut out = String::new();
    for (segment, component) in segments.iter().zip(components) {
        out.push('/');
        match segment {
            Segment::Literal(_) => {
                for c in component.chars() {
                    if *bits.next().unwrap_or(&false) {
                        out.push(c.to_ascii_uppercase());
                    } else {
                        out.push(c.to_ascii_lowercase());
                    }
                }
            }
            Segment::Value { .. } => out.push_str(component),
        }
    }
    out
}

fn literals_changed(segments: &[Segment], original: &str, recased: &str) -> bool {
    let original = original.trim_start_matches('/').split('/');
    let recased = recased.trim_start_matches('/').split('/');

    segments
        .iter()
        .zip(original.zip(recased))
        .any(|(segment, (a, b))| !segment.is_value() && a != b)
}

fn check_roundtrip<T>(id: &T) -> Result<(), TestCaseError>
where
    T: ResourceId + PartialEq + std::fmt::Debug,
{
    let path = id.id();
    prop_assert_eq!(&T::parse(&path)?, id);
    prop_assert_eq!(&T::parse_insensitively(&path)?, id);
    prop_assert_eq!(id.to_string(), path);
    Ok(())
}

fn check_literal_casing<T>(id: &T, mask: &[bool]) -> Result<(), TestCaseError>
where
    T: ResourceId + PartialEq + std::fmt::Debug,
{
    let canonical = id.id();
    let recased = recase_literals(T::KIND.segments(), &canonical, mask);

    prop_assert_eq!(&T::parse_insensitively(&recased)?, id);

    let sensitive = T::parse(&recased);
    if literals_changed(T::KIND.segments(), &canonical, &recased) {
        let err = sensitive.err();
        prop_assert!(err.is_some_and(|e| e.is_case_mismatch()));
    } else {
        prop_assert_eq!(&sensitive?, id);
    }
    Ok(())
}

proptest! {
    #[test]
    fn capacity_roundtrip(id in capacity_id()) {
        check_roundtrip(&id)?;
    }

    #[test]
    fn flow_log_roundtrip(id in flow_log_id()) {
        check_roundtrip(&id)?;
    }

    #[test]
    fn cluster_roundtrip(id in cluster_id()) {
        check_roundtrip(&id)?;
    }

    #[test]
    fn network_watcher_roundtrip((s, rg, name) in (value(), value(), value())) {
        check_roundtrip(&NetworkWatcherId::new(s, rg, name))?;
    }

    #[test]
    fn app_service_environment_roundtrip((s, rg, name) in (value(), value(), value())) {
        check_roundtrip(&AppServiceEnvironmentId::new(s, rg, name))?;
    }

    #[test]
    fn private_cloud_roundtrip((s, rg, name) in (value(), value(), value())) {
        check_roundtrip(&PrivateCloudId::new(s, rg, name))?;
    }

    #[test]
    fn express_route_authorization_roundtrip(id in express_route_authorization_id()) {
        check_roundtrip(&id)?;
    }

    #[test]
    fn capacity_literal_casing(id in capacity_id(), mask in case_mask()) {
        check_literal_casing(&id, &mask)?;
    }

    #[test]
    fn flow_log_literal_casing(id in flow_log_id(), mask in case_mask()) {
        check_literal_casing(&id, &mask)?;
    }

    #[test]
    fn express_route_authorization_literal_casing(
        id in express_route_authorization_id(),
        mask in case_mask()
    ) {
        check_literal_casing(&id, &mask)?;
    }

    #[test]
    fn every_kind_roundtrips_in_both_casings((kind, values) in kind_with_values()) {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        let path = kind.format(&values)?;

        for casing in [Casing::Sensitive, Casing::Insensitive] {
            let parsed = kind.parse(&path, casing)?;
            prop_assert_eq!(parsed.values().collect::<Vec<_>>(), values.clone(), "{}", kind.name());
        }
    }

    #[test]
    fn every_kind_literal_casing((kind, values) in kind_with_values(), mask in case_mask()) {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        let canonical = kind.format(&values)?;
        let recased = recase_literals(kind.segments(), &canonical, &mask);

        let parsed = kind.parse(&recased, Casing::Insensitive)?;
        prop_assert_eq!(parsed.values().collect::<Vec<_>>(), values);

        let sensitive = kind.parse(&recased, Casing::Sensitive);
        if literals_changed(kind.segments(), &canonical, &recased) {
            let err = sensitive.err();
            prop_assert!(err.is_some_and(|e| e.is_case_mismatch()), "{}", recased);
        } else {
            prop_assert!(sensitive.is_ok(), "{}", recased);
        }
    }

    #[test]
    fn values_never_case_folded(id in capacity_id()) {
        let upper = id.id().to_uppercase();
        let parsed = CapacityId::parse_insensitively(&upper)?;

        prop_assert_eq!(parsed.subscription_id, id.subscription_id.to_uppercase());
        prop_assert_eq!(parsed.resource_group, id.resource_group.to_uppercase());
        prop_assert_eq!(parsed.capacity_name, id.capacity_name.to_uppercase());
    }

    #[test]
    fn truncated_paths_rejected(id in capacity_id(), cut in any::<prop::sample::Index>()) {
        let path = id.id();
        // Everything up to and including the separator before the last value.
        let limit = path.len() - id.capacity_name.len();
        let prefix = &path[..cut.index(limit + 1)];

        prop_assert!(CapacityId::parse(prefix).is_err(), "{}", prefix);
        prop_assert!(CapacityId::parse_insensitively(prefix).is_err(), "{}", prefix);
    }

    #[test]
    fn trailing_separator_rejected(id in flow_log_id()) {
        let path = format!("{}/", id.id());
        prop_assert!(FlowLogId::parse(&path).is_err());
        prop_assert!(FlowLogId::parse_insensitively(&path).is_err());
    }
}

#[test]
fn empty_input_rejected() {
    assert!(CapacityId::parse("").unwrap_err().is_empty_input());
    assert!(CapacityId::parse_insensitively("").unwrap_err().is_empty_input());
}
