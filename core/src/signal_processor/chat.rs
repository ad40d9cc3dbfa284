//! Chat message triggers for wave boundaries.
//!
//! The game announces `Wave: 3` when a wave starts and `Wave 3 completed`
//! when it is cleared, possibly wrapped in colour tags.

use memchr::memmem;

const WAVE_START_PREFIX: &[u8] = b"Wave: ";
const WAVE_COMPLETE_PREFIX: &[u8] = b"Wave ";
const WAVE_COMPLETE_SUFFIX: &[u8] = b" completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTrigger {
    WaveStarted { wave: u32 },
    WaveCompleted { wave: u32 },
}

/// Match a game message against the wave triggers. Start wins if both match.
pub fn parse_chat_trigger(message: &str) -> Option<ChatTrigger> {
    let bytes = message.as_bytes();

    if let Some(wave) = find_wave_start(bytes) {
        return Some(ChatTrigger::WaveStarted { wave });
    }
    find_wave_complete(bytes).map(|wave| ChatTrigger::WaveCompleted { wave })
}

fn find_wave_start(bytes: &[u8]) -> Option<u32> {
    memmem::find_iter(bytes, WAVE_START_PREFIX).find_map(|pos| {
        let (wave, _) = leading_number(&bytes[pos + WAVE_START_PREFIX.len()..])?;
        Some(wave)
    })
}

fn find_wave_complete(bytes: &[u8]) -> Option<u32> {
    memmem::find_iter(bytes, WAVE_COMPLETE_PREFIX).find_map(|pos| {
        let rest = &bytes[pos + WAVE_COMPLETE_PREFIX.len()..];
        let (wave, len) = leading_number(rest)?;
        rest[len..].starts_with(WAVE_COMPLETE_SUFFIX).then_some(wave)
    })
}

/// Parse the ASCII digits at the start of `bytes`, returning the value and
/// the number of digits consumed. Values that overflow `u32` don't match.
fn leading_number(bytes: &[u8]) -> Option<(u32, usize)> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[..len]).ok()?;
    digits.parse().ok().map(|wave| (wave, len))
}
