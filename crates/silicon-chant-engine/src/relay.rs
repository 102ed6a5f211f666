//! The UDP relay: send the sigil, forward whatever arrives.
//!
//! Two sockets: an inbound one bound to the listen port in non-blocking
//! mode, and an outbound one connected to the destination. Each loop
//! iteration sends the sigil, then polls the inbound side exactly once.
//! A received datagram is forwarded verbatim to the same destination, so
//! cooperating instances can form feedback chains where every participant
//! adds its own sigil to the stream.

use std::io;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use silicon_chant_core::Sigil;

use crate::cancel::CancelToken;
use crate::engine::ChantOutcome;
use crate::error::{ChantError, Result};
use crate::sink::send_connected;

/// Default capacity of the inbound datagram buffer, in bytes.
///
/// Datagrams longer than the buffer are truncated by the OS on receive.
/// 512 bytes holds any sigil folded from a phrase of up to 262,144 bytes,
/// which is far beyond anything typed into a prompt.
pub const RELAY_RECV_CAPACITY: usize = 512;

/// Run a relay chant: bind, connect, then loop until cancelled or a socket
/// fails.
///
/// Failure to put the listen socket into non-blocking mode is reported as
/// [`ChantError::SetNonblocking`], distinct from bind and connect failures.
pub fn relay_chant(
    sigil: &Sigil,
    cancel: &CancelToken,
    listen_port: u16,
    dest: SocketAddrV4,
    recv_capacity: usize,
) -> Result<ChantOutcome> {
    let inbound = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, listen_port)).map_err(|source| {
        ChantError::Bind {
            port: listen_port,
            source,
        }
    })?;
    let outbound = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(ChantError::OpenSocket)?;
    outbound
        .connect(dest)
        .map_err(|source| ChantError::Connect { dest, source })?;
    inbound
        .set_nonblocking(true)
        .map_err(ChantError::SetNonblocking)?;

    tracing::debug!(
        "relaying: listening on port {}, sending to {}",
        listen_port,
        dest
    );
    relay_loop(sigil, cancel, &inbound, &outbound, recv_capacity)
}

/// The relay loop over sockets the caller has already set up.
///
/// `inbound` must be non-blocking; `outbound` must be connected. Factored
/// out of [`relay_chant`] so a harness can drive the loop with sockets on
/// ports it picked itself.
pub fn relay_loop(
    sigil: &Sigil,
    cancel: &CancelToken,
    inbound: &UdpSocket,
    outbound: &UdpSocket,
    recv_capacity: usize,
) -> Result<ChantOutcome> {
    let mut buf = vec![0u8; recv_capacity];

    while !cancel.is_cancelled() {
        send_connected(outbound, sigil.as_bytes())?;

        // One poll per iteration; "nothing there yet" keeps the loop moving.
        match inbound.recv(&mut buf) {
            Ok(n) if n > 0 => send_connected(outbound, &buf[..n])?,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => return Err(ChantError::Recv(e)),
        }
    }

    Ok(ChantOutcome::Cancelled)
}
