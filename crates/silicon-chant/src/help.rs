//! Help text for the interactive session.

use std::io::{self, Write};

/// The general command summary.
pub fn general_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "- general help -")?;
    writeln!(out, "sigil\t\t: report the current sigil")?;
    writeln!(
        out,
        "sigil <phrase>\t: sigilise the given phrase and set the current sigil accordingly"
    )?;
    writeln!(out, "chant <type>\t: chant the current sigil in the given manner")?;
    writeln!(
        out,
        "geomantic\t: interpret the current sigil as a series of four-bit geomantic signs"
    )?;
    writeln!(out, "end\t\t: close sc")?;
    writeln!(out, "help\t\t: print this text")?;
    writeln!(out, "help <command>\t: give more in-depth help about a specific command")?;
    Ok(())
}

/// In-depth help for one topic; unknown topics fall back to the general
/// summary.
pub fn topic_help<W: Write>(topic: &str, out: &mut W) -> io::Result<()> {
    match topic {
        "sigil" => {
            writeln!(out, "- sigil -")?;
            writeln!(
                out,
                "the sigil command sigilises a phrase and sets the current working sigil to the result."
            )?;
            writeln!(
                out,
                "a computer sigil is not an image file depicting a sigil. computers don't know what an image is."
            )?;
            writeln!(
                out,
                "a computer sigil is the only thing a computer understands: a binary string, partitioned into bytes."
            )?;
            writeln!(out, "the sigilising algorithm is as follows:")?;
            writeln!(
                out,
                "the input bytes are arranged into a square, padded with nulls if necessary."
            )?;
            writeln!(
                out,
                "then the rows of the square are iteratively bitwise XNORed to produce a sigil the length of one row."
            )?;
        }
        "chant" => {
            writeln!(out, "- chant -")?;
            writeln!(
                out,
                "chanting consists of the computer meditating on a sigil by repeatedly processing it."
            )?;
            writeln!(out, "the following kinds of chant are provided:")?;
            writeln!(
                out,
                "heap\t\t: the sigil is written to the heap until a moment of rupture/gnosis occurs when the heap memory runs out"
            )?;
            writeln!(
                out,
                "stack\t\t: the sigil is recursively written to the stack until a moment of rupture/gnosis occurs when the stack memory runs out"
            )?;
            writeln!(
                out,
                "stdout\t\t: the sigil is written to stdout until the program is cancelled."
            )?;
            writeln!(
                out,
                "stderr\t\t: the sigil is written to stderr instead. if stderr is piped onwards, eg to aplay, you can still use the sc interface."
            )?;
            writeln!(
                out,
                "disk <path>\t: takes a file or block device as an argument, to which the sigil is written until space runs out."
            )?;
            writeln!(
                out,
                "net <ip>:<port>\t\t\t: takes an address as an argument, to which the sigil is sent as a stream of udp packets."
            )?;
            writeln!(
                out,
                "netrepeat <listenport> <ip>:<port>\t: sends the current sigil like the net chant, but also forwards on any udp data received on the listen port."
            )?;
        }
        "geomantic" => {
            writeln!(out, "- geomantic signs -")?;
            writeln!(
                out,
                "the geomantic signs are part of a system of divination. they are included here because the underlying mathematics is binary. any byte can be interpreted as a pair of geomantic signs. rather than include their meanings here, you can look them up."
            )?;
        }
        other => {
            writeln!(out, "unrecognised help topic: {}", other)?;
            general_help(out)?;
        }
    }
    Ok(())
}
