//! Chant specifications: which sink, with which arguments.
//!
//! A specification is parsed once per invocation from the text after the
//! `chant` verb and discarded when the chant ends.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::path::PathBuf;

use crate::error::SpecError;

/// A validated sink selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChantSpec {
    /// Leak sigil-sized allocations until the allocator gives up.
    Heap,
    /// Recurse with a per-frame sigil copy until the stack runs out.
    Stack,
    /// Write the raw sigil bytes to stdout in a tight loop.
    Stdout,
    /// Write the raw sigil bytes to stderr, leaving stdout free for the
    /// interface.
    Stderr,
    /// Fill a file or block device with the sigil, after confirmation.
    Disk { path: PathBuf },
    /// Send the sigil as one UDP datagram per iteration.
    Net { dest: SocketAddrV4 },
    /// Like `Net`, but also listen on a port and forward anything received.
    NetRelay {
        listen_port: u16,
        dest: SocketAddrV4,
    },
}

impl ChantSpec {
    /// Parse the argument text of a `chant` command.
    ///
    /// Grammar: `heap | stack | stdout | stderr | disk <path> |
    /// net <ip>:<port> | netrepeat <listenPort> <ip>:<port>`.
    /// Malformed input is a [`SpecError`], never a panic.
    pub fn parse(input: &str) -> Result<Self, SpecError> {
        let input = input.trim();
        let (kind, rest) = match input.split_once(char::is_whitespace) {
            Some((kind, rest)) => (kind, rest.trim()),
            None => (input, ""),
        };

        match kind {
            "" => Err(SpecError::MissingKind),
            "heap" | "stack" | "stdout" | "stderr" if !rest.is_empty() => {
                Err(SpecError::UnknownKind(input.to_string()))
            }
            "heap" => Ok(ChantSpec::Heap),
            "stack" => Ok(ChantSpec::Stack),
            "stdout" => Ok(ChantSpec::Stdout),
            "stderr" => Ok(ChantSpec::Stderr),
            "disk" => {
                if rest.is_empty() {
                    return Err(SpecError::MissingArgument {
                        kind: "disk",
                        what: "a target path",
                    });
                }
                Ok(ChantSpec::Disk {
                    path: PathBuf::from(rest),
                })
            }
            "net" => {
                if rest.is_empty() {
                    return Err(SpecError::MissingArgument {
                        kind: "net",
                        what: "a destination <ip>:<port>",
                    });
                }
                Ok(ChantSpec::Net {
                    dest: parse_dest(rest)?,
                })
            }
            "netrepeat" => {
                let (listen, dest) = rest.split_once(char::is_whitespace).ok_or(
                    SpecError::MissingArgument {
                        kind: "netrepeat",
                        what: "a listen port and a destination <ip>:<port>",
                    },
                )?;
                let listen_port = listen
                    .parse()
                    .map_err(|_| SpecError::InvalidPort(listen.to_string()))?;
                Ok(ChantSpec::NetRelay {
                    listen_port,
                    dest: parse_dest(dest.trim())?,
                })
            }
            _ => Err(SpecError::UnknownKind(input.to_string())),
        }
    }

    /// Short name of the sink, for messages and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChantSpec::Heap => "heap",
            ChantSpec::Stack => "stack",
            ChantSpec::Stdout => "stdout",
            ChantSpec::Stderr => "stderr",
            ChantSpec::Disk { .. } => "disk",
            ChantSpec::Net { .. } => "net",
            ChantSpec::NetRelay { .. } => "netrepeat",
        }
    }
}

/// Parse `<ip>:<port>` with a dotted-decimal IPv4 address and numeric port.
fn parse_dest(s: &str) -> Result<SocketAddrV4, SpecError> {
    let (ip, port) = s
        .rsplit_once(':')
        .ok_or_else(|| SpecError::InvalidAddress(s.to_string()))?;
    let ip: Ipv4Addr = ip
        .parse()
        .map_err(|_| SpecError::InvalidAddress(s.to_string()))?;
    let port: u16 = port
        .parse()
        .map_err(|_| SpecError::InvalidPort(port.to_string()))?;
    Ok(SocketAddrV4::new(ip, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_kinds() {
        assert_eq!(ChantSpec::parse("heap").unwrap(), ChantSpec::Heap);
        assert_eq!(ChantSpec::parse("stack").unwrap(), ChantSpec::Stack);
        assert_eq!(ChantSpec::parse("stdout").unwrap(), ChantSpec::Stdout);
        assert_eq!(ChantSpec::parse("stderr").unwrap(), ChantSpec::Stderr);
    }

    #[test]
    fn test_parse_disk_takes_whole_remainder() {
        let spec = ChantSpec::parse("disk /dev/sdb").unwrap();
        assert_eq!(
            spec,
            ChantSpec::Disk {
                path: PathBuf::from("/dev/sdb")
            }
        );

        // Paths with spaces survive
        let spec = ChantSpec::parse("disk /mnt/usb stick/talisman").unwrap();
        assert_eq!(
            spec,
            ChantSpec::Disk {
                path: PathBuf::from("/mnt/usb stick/talisman")
            }
        );
    }

    #[test]
    fn test_parse_net_destination() {
        let spec = ChantSpec::parse("net 192.168.1.10:888").unwrap();
        assert_eq!(
            spec,
            ChantSpec::Net {
                dest: SocketAddrV4::new(Ipv4Addr::new(192, 168, 1, 10), 888)
            }
        );
    }

    #[test]
    fn test_parse_netrepeat() {
        let spec = ChantSpec::parse("netrepeat 888 10.0.0.2:999").unwrap();
        assert_eq!(
            spec,
            ChantSpec::NetRelay {
                listen_port: 888,
                dest: SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 2), 999)
            }
        );
    }

    #[test]
    fn test_unparsable_address_is_an_error_not_a_crash() {
        assert!(matches!(
            ChantSpec::parse("net 999.999.999.999:abc"),
            Err(SpecError::InvalidAddress(_))
        ));
        assert!(matches!(
            ChantSpec::parse("net 127.0.0.1:notaport"),
            Err(SpecError::InvalidPort(_))
        ));
        assert!(matches!(
            ChantSpec::parse("net 127.0.0.1"),
            Err(SpecError::InvalidAddress(_))
        ));
        // Hostnames are out: dotted-decimal only
        assert!(matches!(
            ChantSpec::parse("net localhost:888"),
            Err(SpecError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_missing_arguments() {
        assert!(matches!(
            ChantSpec::parse("disk"),
            Err(SpecError::MissingArgument { kind: "disk", .. })
        ));
        assert!(matches!(
            ChantSpec::parse("net"),
            Err(SpecError::MissingArgument { kind: "net", .. })
        ));
        assert!(matches!(
            ChantSpec::parse("netrepeat 888"),
            Err(SpecError::MissingArgument {
                kind: "netrepeat",
                ..
            })
        ));
        assert!(matches!(ChantSpec::parse(""), Err(SpecError::MissingKind)));
    }

    #[test]
    fn test_unknown_kind_names_the_input() {
        match ChantSpec::parse("moon") {
            Err(SpecError::UnknownKind(s)) => assert_eq!(s, "moon"),
            other => panic!("expected UnknownKind, got {:?}", other),
        }
        // Trailing junk after an argless kind is not silently ignored
        assert!(matches!(
            ChantSpec::parse("heap extra"),
            Err(SpecError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_netrepeat_bad_listen_port() {
        assert!(matches!(
            ChantSpec::parse("netrepeat zero 10.0.0.2:999"),
            Err(SpecError::InvalidPort(_))
        ));
        assert!(matches!(
            ChantSpec::parse("netrepeat 70000 10.0.0.2:999"),
            Err(SpecError::InvalidPort(_))
        ));
    }
}
