//! The repetition sinks: heap, stack, stream, disk, and net.
//!
//! Every driver shares the same shape: repeat until the token cancels, an
//! unrecoverable error arrives, or (heap/stack) the OS refuses to go on.
//! None of them impose iteration caps of their own.

use std::fs::File;
use std::io::Write;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};
use std::path::Path;

use silicon_chant_core::Sigil;

use crate::cancel::CancelToken;
use crate::confirm::Confirm;
use crate::engine::ChantOutcome;
use crate::error::{ChantError, Result};

/// Fill the heap with copies of the sigil.
///
/// Each copy is deliberately never reclaimed; allocator exhaustion is the
/// terminal event for this chant, so an allocation failure aborts the
/// process rather than returning an error.
pub fn heap_chant(sigil: &Sigil, cancel: &CancelToken) -> ChantOutcome {
    while !cancel.is_cancelled() {
        std::mem::forget(sigil.as_bytes().to_vec());
    }
    ChantOutcome::Cancelled
}

/// Fill the stack with frames, each holding its own copy of the sigil.
///
/// Ends in a stack overflow unless cancelled first.
pub fn stack_chant(sigil: &Sigil, cancel: &CancelToken) -> ChantOutcome {
    descend(sigil.as_bytes(), cancel);
    ChantOutcome::Cancelled
}

fn descend(sigil: &[u8], cancel: &CancelToken) {
    if cancel.is_cancelled() {
        return;
    }
    // The frame's copy stays live across the recursive call and is read
    // again afterwards, so the call cannot be flattened into a tail call.
    let frame_copy = sigil.to_vec();
    descend(&frame_copy, cancel);
    std::hint::black_box(&frame_copy);
}

/// Write the raw sigil bytes to `writer` in a tight loop, flushing every
/// iteration. `target` names the destination in error messages.
pub fn write_chant<W: Write>(
    sigil: &Sigil,
    cancel: &CancelToken,
    writer: &mut W,
    target: &str,
) -> Result<ChantOutcome> {
    while !cancel.is_cancelled() {
        writer
            .write_all(sigil.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| ChantError::Write {
                target: target.to_string(),
                source,
            })?;
    }
    Ok(ChantOutcome::Cancelled)
}

/// Fill a file or block device with the sigil, after confirmation.
///
/// The target is opened only once the user has typed the exact token, so a
/// declined chant leaves no trace on disk. A write error (typically the
/// device filling up) ends the chant with its cause.
pub fn disk_chant<C: Confirm>(
    sigil: &Sigil,
    cancel: &CancelToken,
    path: &Path,
    confirm: &mut C,
) -> Result<ChantOutcome> {
    if !confirm.confirm(path).map_err(ChantError::Prompt)? {
        return Ok(ChantOutcome::Aborted);
    }

    let mut file = File::create(path).map_err(|source| ChantError::OpenDevice {
        path: path.to_path_buf(),
        source,
    })?;
    write_chant(sigil, cancel, &mut file, &path.display().to_string())
}

/// Send the sigil to `dest` as one UDP datagram per iteration.
///
/// An empty sigil sends legal empty datagrams. Socket errors (including a
/// peer answering with ICMP port-unreachable on a connected socket) end the
/// chant with their cause.
pub fn net_chant(sigil: &Sigil, cancel: &CancelToken, dest: SocketAddrV4) -> Result<ChantOutcome> {
    let socket =
        UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(ChantError::OpenSocket)?;
    socket
        .connect(dest)
        .map_err(|source| ChantError::Connect { dest, source })?;

    send_loop(sigil, cancel, &socket)
}

/// The send half shared by the net chant and the relay: one datagram per
/// iteration on an already-connected socket.
pub fn send_loop(sigil: &Sigil, cancel: &CancelToken, socket: &UdpSocket) -> Result<ChantOutcome> {
    while !cancel.is_cancelled() {
        send_connected(socket, sigil.as_bytes())?;
    }
    Ok(ChantOutcome::Cancelled)
}

pub(crate) fn send_connected(socket: &UdpSocket, payload: &[u8]) -> Result<()> {
    socket.send(payload).map_err(|source| ChantError::Send {
        dest: socket.peer_addr().unwrap_or_else(|_| {
            std::net::SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0))
        }),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    fn cancelled() -> CancelToken {
        let token = CancelToken::new();
        token.cancel();
        token
    }

    /// Cancel `token` after `dur` from another thread.
    fn cancel_after(token: &CancelToken, dur: Duration) -> std::thread::JoinHandle<()> {
        let token = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(dur);
            token.cancel();
        })
    }

    struct AutoConfirm(bool);

    impl Confirm for AutoConfirm {
        fn confirm(&mut self, _path: &Path) -> io::Result<bool> {
            Ok(self.0)
        }
    }

    /// Writer that accepts a fixed number of writes, then reports a full
    /// device.
    struct LimitedWriter {
        writes_left: usize,
        written: Vec<u8>,
    }

    impl Write for LimitedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            self.writes_left -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_heap_chant_observes_cancellation() {
        let outcome = heap_chant(&Sigil::from_phrase(b"hello world"), &cancelled());
        assert_eq!(outcome, ChantOutcome::Cancelled);
    }

    #[test]
    fn test_heap_chant_empty_sigil_does_not_hang() {
        let token = CancelToken::new();
        let timer = cancel_after(&token, Duration::from_millis(10));
        let outcome = heap_chant(&Sigil::from_phrase(b""), &token);
        assert_eq!(outcome, ChantOutcome::Cancelled);
        timer.join().unwrap();
    }

    #[test]
    fn test_stack_chant_observes_cancellation() {
        let outcome = stack_chant(&Sigil::from_phrase(b"hello world"), &cancelled());
        assert_eq!(outcome, ChantOutcome::Cancelled);
    }

    #[test]
    fn test_write_chant_repeats_until_writer_fails() {
        let sigil = Sigil::from_phrase(b"hello world");
        let mut writer = LimitedWriter {
            writes_left: 3,
            written: Vec::new(),
        };

        let err = write_chant(&sigil, &CancelToken::new(), &mut writer, "test-device")
            .expect_err("full device must end the chant");
        assert!(matches!(err, ChantError::Write { ref target, .. } if target == "test-device"));
        // Three whole sigils landed before the device filled up
        assert_eq!(writer.written, sigil.as_bytes().repeat(3));
    }

    #[test]
    fn test_write_chant_cancelled_before_first_write() {
        let mut writer = LimitedWriter {
            writes_left: 100,
            written: Vec::new(),
        };
        let outcome = write_chant(
            &Sigil::from_phrase(b"hello world"),
            &cancelled(),
            &mut writer,
            "test-device",
        )
        .unwrap();
        assert_eq!(outcome, ChantOutcome::Cancelled);
        assert!(writer.written.is_empty());
    }

    #[test]
    fn test_write_chant_empty_sigil_is_a_noop_loop() {
        let token = CancelToken::new();
        let timer = cancel_after(&token, Duration::from_millis(10));
        let mut sink = Vec::new();
        let outcome =
            write_chant(&Sigil::from_phrase(b""), &token, &mut sink, "test-device").unwrap();
        assert_eq!(outcome, ChantOutcome::Cancelled);
        assert!(sink.is_empty());
        timer.join().unwrap();
    }

    #[test]
    fn test_disk_chant_declined_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("talisman");

        let outcome = disk_chant(
            &Sigil::from_phrase(b"hello world"),
            &CancelToken::new(),
            &target,
            &mut AutoConfirm(false),
        )
        .unwrap();

        assert_eq!(outcome, ChantOutcome::Aborted);
        assert!(!target.exists(), "declined chant must not touch the path");
    }

    #[test]
    fn test_disk_chant_confirmed_writes_until_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("talisman");
        let sigil = Sigil::from_phrase(b"hello world");

        let token = CancelToken::new();
        let timer = cancel_after(&token, Duration::from_millis(20));
        let outcome = disk_chant(&sigil, &token, &target, &mut AutoConfirm(true)).unwrap();
        timer.join().unwrap();

        assert_eq!(outcome, ChantOutcome::Cancelled);
        let written = std::fs::read(&target).unwrap();
        assert!(!written.is_empty());
        // The file holds whole sigil repetitions, nothing else
        assert_eq!(written.len() % sigil.len(), 0);
        assert_eq!(&written[..sigil.len()], sigil.as_bytes());
    }

    #[test]
    fn test_net_chant_sends_datagrams() {
        let receiver = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let dest = match receiver.local_addr().unwrap() {
            std::net::SocketAddr::V4(v4) => v4,
            other => panic!("expected an ipv4 local addr, got {other}"),
        };

        let sigil = Sigil::from_phrase(b"hello world");
        let token = CancelToken::new();

        let chanter = {
            let sigil = sigil.clone();
            let token = token.clone();
            std::thread::spawn(move || net_chant(&sigil, &token, dest))
        };

        let mut buf = [0u8; 64];
        let n = receiver.recv(&mut buf).expect("a datagram should arrive");
        assert_eq!(&buf[..n], sigil.as_bytes());

        token.cancel();
        let outcome = chanter.join().unwrap();
        // The chant may have hit an error after cancellation raced a send;
        // what matters is that it made progress and stopped.
        if let Ok(outcome) = outcome {
            assert_eq!(outcome, ChantOutcome::Cancelled);
        }
    }

    #[test]
    fn test_net_chant_empty_sigil_sends_empty_datagrams() {
        let receiver = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let dest = match receiver.local_addr().unwrap() {
            std::net::SocketAddr::V4(v4) => v4,
            other => panic!("expected an ipv4 local addr, got {other}"),
        };

        let token = CancelToken::new();
        let chanter = {
            let token = token.clone();
            std::thread::spawn(move || net_chant(&Sigil::from_phrase(b""), &token, dest))
        };

        let mut buf = [0u8; 8];
        let n = receiver.recv(&mut buf).expect("an empty datagram is legal");
        assert_eq!(n, 0);

        token.cancel();
        let _ = chanter.join().unwrap();
    }
}
