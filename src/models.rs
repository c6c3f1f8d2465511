//! Workspace snapshot types as returned by the workspace API.
//!
//! The whole graph is deserialized fresh on every fetch and discarded once
//! the matching server has been extracted; nothing here is cached or mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute key that labels a server's role.
pub const SERVER_TYPE_ATTRIBUTE: &str = "type";

/// Attribute value identifying the hosted IDE dev server.
pub const DEV_SERVER_TYPE: &str = "ide-dev";

/// A workspace as reported by the workspace API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Opaque workspace identifier
    pub id: String,
    /// Lifecycle status string (e.g. `RUNNING`, `STOPPED`)
    #[serde(default)]
    pub status: Option<String>,
    /// Live topology; absent while the workspace is not running
    #[serde(default)]
    pub runtime: Option<Runtime>,
}

impl Workspace {
    /// A workspace with no runtime is not running. This is terminal for a
    /// lookup, not a transient condition to retry.
    pub const fn is_running(&self) -> bool {
        self.runtime.is_some()
    }
}

/// Live topology of a running workspace.
///
/// Maps are `BTreeMap` so iteration is deterministic (lexicographic by key);
/// the wire format promises no ordering of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Runtime {
    /// Machines by machine name
    #[serde(default)]
    pub machines: BTreeMap<String, Machine>,
}

impl Runtime {
    /// Flatten machines and their servers into a single sequence of
    /// `(machine name, server name, server)` triples.
    ///
    /// Order is lexicographic by machine name, then server name, so a scan
    /// over this sequence has a deterministic first match.
    pub fn servers(&self) -> impl Iterator<Item = (&str, &str, &Server)> {
        self.machines.iter().flat_map(|(machine_name, machine)| {
            machine
                .servers
                .iter()
                .map(move |(server_name, server)| {
                    (machine_name.as_str(), server_name.as_str(), server)
                })
        })
    }
}

/// A machine within a workspace runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Machine {
    /// Servers by server name
    #[serde(default)]
    pub servers: BTreeMap<String, Server>,
}

/// A named network endpoint exposed by a machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Externally reachable connection URL
    pub url: String,
    /// Role attributes; absent on the wire means no attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Server {
    /// The server's `type` attribute, if present.
    pub fn server_type(&self) -> Option<&str> {
        self.attributes.get(SERVER_TYPE_ATTRIBUTE).map(String::as_str)
    }

    /// Check whether this server hosts the IDE dev instance.
    pub fn is_dev_server(&self) -> bool {
        self.server_type() == Some(DEV_SERVER_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dev_server(url: &str) -> Server {
        Server {
            url: url.to_string(),
            attributes: BTreeMap::from([(
                SERVER_TYPE_ATTRIBUTE.to_string(),
                DEV_SERVER_TYPE.to_string(),
            )]),
        }
    }

    #[test]
    fn test_deserialize_running_workspace() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "workspace0x1",
            "status": "RUNNING",
            "runtime": {
                "machines": {
                    "dev-machine": {
                        "servers": {
                            "theia-dev": {
                                "url": "http://example.test:1234/",
                                "attributes": {"type": "ide-dev", "internal": "false"}
                            },
                            "exec-agent": {
                                "url": "http://example.test:4444/"
                            }
                        }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(workspace.id, "workspace0x1");
        assert!(workspace.is_running());

        let runtime = workspace.runtime.unwrap();
        let servers: Vec<_> = runtime.servers().collect();
        assert_eq!(servers.len(), 2);

        let dev = &runtime.machines["dev-machine"].servers["theia-dev"];
        assert!(dev.is_dev_server());
        assert_eq!(dev.server_type(), Some("ide-dev"));

        // attributes omitted on the wire deserialize as an empty map
        let exec = &runtime.machines["dev-machine"].servers["exec-agent"];
        assert!(exec.attributes.is_empty());
        assert!(!exec.is_dev_server());
    }

    #[test]
    fn test_deserialize_stopped_workspace() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "workspace0x1",
            "status": "STOPPED"
        }))
        .unwrap();

        assert!(!workspace.is_running());
        assert!(workspace.runtime.is_none());
    }

    #[test]
    fn test_servers_iteration_order_is_lexicographic() {
        let runtime = Runtime {
            machines: BTreeMap::from([
                (
                    "zeta".to_string(),
                    Machine {
                        servers: BTreeMap::from([("a-server".to_string(), dev_server("http://z/"))]),
                    },
                ),
                (
                    "alpha".to_string(),
                    Machine {
                        servers: BTreeMap::from([
                            ("b-server".to_string(), dev_server("http://a-b/")),
                            ("a-server".to_string(), dev_server("http://a-a/")),
                        ]),
                    },
                ),
            ]),
        };

        let order: Vec<_> = runtime
            .servers()
            .map(|(machine, server, _)| format!("{machine}/{server}"))
            .collect();
        assert_eq!(order, vec!["alpha/a-server", "alpha/b-server", "zeta/a-server"]);
    }

    #[test]
    fn test_server_type_missing_attribute() {
        let server = Server {
            url: "http://example.test/".to_string(),
            attributes: BTreeMap::from([("internal".to_string(), "true".to_string())]),
        };
        assert_eq!(server.server_type(), None);
        assert!(!server.is_dev_server());
    }
}
