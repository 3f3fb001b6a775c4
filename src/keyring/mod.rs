//! Keyring-connection reconciliation.
//!
//! A keyring connection is a stored third-party authorization. For location
//! services one authorization can expose several external accounts
//! (locations), and a site pins exactly one of them through two site
//! settings. Reconciliation expands connections per external account and
//! keeps only the pinned one.

use serde::{Deserialize, Serialize};

/// An external account reachable through a keyring connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    pub external_id: String,
    pub external_name: String,
}

/// A stored third-party service authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringConnection {
    pub id: u64,
    pub service: String,
    #[serde(default)]
    pub additional_external_users: Vec<ExternalUser>,
}

/// The two site settings that pin a location to a site. The same location
/// may be pinned by multiple sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSettings {
    pub keyring_id: Option<u64>,
    pub location_id: Option<String>,
}

/// One connection/external-account pair attributed to a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteKeyringConnection {
    pub keyring_connection_id: u64,
    pub external_id: String,
    pub external_display: String,
}

/// True when the site has a location pinned — the `has_connected_location`
/// input of the nudge visibility policy.
pub fn is_location_connected(settings: &LocationSettings) -> bool {
    settings.keyring_id.is_some() && settings.location_id.is_some()
}

/// Resolves the site's pinned connection(s) for `service_id`. Incomplete
/// settings yield nothing; connections without external users contribute
/// nothing.
pub fn site_keyring_connections(
    service_id: &str,
    connections: &[KeyringConnection],
    settings: &LocationSettings,
) -> Vec<SiteKeyringConnection> {
    let (Some(keyring_id), Some(location_id)) =
        (settings.keyring_id, settings.location_id.as_deref())
    else {
        return Vec::new();
    };

    connections
        .iter()
        .flat_map(|connection| {
            connection
                .additional_external_users
                .iter()
                .map(move |user| (connection, user))
        })
        .filter(|(connection, user)| {
            connection.service == service_id
                && connection.id == keyring_id
                && user.external_id == location_id
        })
        .map(|(connection, user)| SiteKeyringConnection {
            keyring_connection_id: connection.id,
            external_id: user.external_id.clone(),
            external_display: user.external_name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(id: u64, service: &str, users: &[(&str, &str)]) -> KeyringConnection {
        KeyringConnection {
            id,
            service: service.to_string(),
            additional_external_users: users
                .iter()
                .map(|(external_id, name)| ExternalUser {
                    external_id: (*external_id).to_string(),
                    external_name: (*name).to_string(),
                })
                .collect(),
        }
    }

    fn settings(keyring_id: u64, location_id: &str) -> LocationSettings {
        LocationSettings {
            keyring_id: Some(keyring_id),
            location_id: Some(location_id.to_string()),
        }
    }

    #[test]
    fn incomplete_settings_mean_not_connected() {
        assert!(!is_location_connected(&LocationSettings::default()));
        assert!(!is_location_connected(&LocationSettings {
            keyring_id: Some(5),
            location_id: None,
        }));
        assert!(is_location_connected(&settings(5, "loc-1")));
    }

    #[test]
    fn incomplete_settings_resolve_no_connections() {
        let connections = vec![connection(5, "location-service", &[("loc-1", "Shop")])];
        let resolved = site_keyring_connections(
            "location-service",
            &connections,
            &LocationSettings::default(),
        );
        assert!(resolved.is_empty());
    }

    #[test]
    fn pinned_location_is_resolved() {
        let connections = vec![connection(
            5,
            "location-service",
            &[("loc-1", "Shop"), ("loc-2", "Warehouse")],
        )];
        let resolved =
            site_keyring_connections("location-service", &connections, &settings(5, "loc-2"));

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].keyring_connection_id, 5);
        assert_eq!(resolved[0].external_id, "loc-2");
        assert_eq!(resolved[0].external_display, "Warehouse");
    }

    #[test]
    fn other_services_and_keyrings_are_filtered_out() {
        let connections = vec![
            connection(5, "location-service", &[("loc-1", "Shop")]),
            connection(6, "location-service", &[("loc-1", "Shop")]),
            connection(5, "publishing-service", &[("loc-1", "Shop")]),
        ];
        let resolved =
            site_keyring_connections("location-service", &connections, &settings(5, "loc-1"));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].keyring_connection_id, 5);
    }

    #[test]
    fn connection_without_external_users_contributes_nothing() {
        let connections = vec![connection(5, "location-service", &[])];
        let resolved =
            site_keyring_connections("location-service", &connections, &settings(5, "loc-1"));
        assert!(resolved.is_empty());
    }
}
