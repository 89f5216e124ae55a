//! Punycode (RFC 3492) for single labels.
//!
//! These functions work on the label body only; adding and stripping the
//! `xn--` prefix is left to the caller.

use crate::error::PunycodeError;

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

/// Encodes a Unicode label body into Punycode.
///
/// # Errors
///
/// Returns `PunycodeError::Overflow` if the label is too long to encode.
///
/// # Examples
///
/// ```
/// use tiered_domain::punycode;
///
/// assert_eq!(punycode::encode("café").unwrap(), "caf-dma");
/// assert_eq!(punycode::encode("bücher").unwrap(), "bcher-kva");
/// ```
pub fn encode(input: &str) -> Result<String, PunycodeError> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();

    let mut output: String = input.chars().filter(char::is_ascii).collect();
    let basic = u32::try_from(output.len()).map_err(|_| PunycodeError::Overflow)?;
    let total = u32::try_from(code_points.len()).map_err(|_| PunycodeError::Overflow)?;
    if basic > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < total {
        let m = code_points
            .iter()
            .copied()
            .filter(|&c| c >= n)
            .min()
            .ok_or(PunycodeError::Overflow)?;
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in &code_points {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n = n.checked_add(1).ok_or(PunycodeError::Overflow)?;
    }

    Ok(output)
}

/// Decodes a Punycode label body into Unicode.
///
/// # Errors
///
/// Returns `PunycodeError` if the input contains non-ASCII basic code
/// points, invalid digits, overflows, or decodes to an invalid code point.
///
/// # Examples
///
/// ```
/// use tiered_domain::punycode;
///
/// assert_eq!(punycode::decode("caf-dma").unwrap(), "café");
/// ```
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    let (basic, extended) = match input.rfind(DELIMITER) {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => ("", input),
    };
    if !basic.is_ascii() {
        return Err(PunycodeError::NonBasic);
    }

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut digits = extended.bytes();

    while digits.len() > 0 {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;
        loop {
            let byte = digits.next().ok_or(PunycodeError::Overflow)?;
            let digit = decode_digit(byte).ok_or(PunycodeError::InvalidDigit { byte })?;
            i = digit
                .checked_mul(w)
                .and_then(|d| i.checked_add(d))
                .ok_or(PunycodeError::Overflow)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(PunycodeError::Overflow)?;
            k += BASE;
        }

        let len = u32::try_from(output.len() + 1).map_err(|_| PunycodeError::Overflow)?;
        bias = adapt(i - old_i, len, old_i == 0);
        n = n.checked_add(i / len).ok_or(PunycodeError::Overflow)?;
        i %= len;

        let c = char::from_u32(n).ok_or(PunycodeError::InvalidCodePoint)?;
        let position = usize::try_from(i).map_err(|_| PunycodeError::Overflow)?;
        output.insert(position, c);
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// Bias adaptation (RFC 3492 section 6.1).
fn adapt(delta: u32, num_points: u32, first: bool) -> u32 {
    let mut delta = if first { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

fn encode_digit(d: u32) -> char {
    // d < 36 by construction
    let d = u8::try_from(d).unwrap_or(0);
    if d < 26 {
        char::from(b'a' + d)
    } else {
        char::from(b'0' + (d - 26))
    }
}

fn decode_digit(byte: u8) -> Option<u32> {
    match byte {
        b'a'..=b'z' => Some(u32::from(byte - b'a')),
        b'A'..=b'Z' => Some(u32::from(byte - b'A')),
        b'0'..=b'9' => Some(u32::from(byte - b'0') + 26),
        _ => None,
    }
}
