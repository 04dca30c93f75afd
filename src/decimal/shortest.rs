// ============================================================================
// Shortest Decimal Conversion
// Round-trip safe double to string conversion with a bounded digit search
// ============================================================================

use arrayvec::ArrayVec;

use super::pow5::{self, POW5_BITCOUNT, POW5_INV_BITCOUNT};

/// Default lowest decimal exponent rendered without scientific notation.
pub const DEFAULT_LOW_EXP: i32 = -3;

/// Default highest decimal exponent rendered without scientific notation.
pub const DEFAULT_HIGH_EXP: i32 = 7;

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BITS: u32 = 11;
const EXPONENT_MASK: u64 = (1 << EXPONENT_BITS) - 1;
const EXPONENT_BIAS: i32 = (1 << (EXPONENT_BITS - 1)) - 1;

/// Convert a double to its shortest round-trip decimal representation.
///
/// The returned string parses back to the exact original bit pattern, and no
/// representation with fewer significant digits does. Values whose decimal
/// exponent lies in `[-3, 7)` render in plain notation, others in scientific
/// notation (`"1.0E7"`, `"4.9E-324"`). Total over all inputs: `NaN`,
/// `Infinity`, `-Infinity`, `0.0` and `-0.0` render as those exact strings.
pub fn shortest(value: f64) -> String {
    convert(value, DEFAULT_LOW_EXP, DEFAULT_HIGH_EXP, None)
}

/// Convert a double to its shortest round-trip decimal representation, with
/// caller-supplied notation thresholds.
///
/// Values whose decimal exponent lies in `[low_exp, high_exp)` render in
/// plain notation, others in scientific notation.
pub fn shortest_ranged(value: f64, low_exp: i32, high_exp: i32) -> String {
    convert(value, low_exp, high_exp, None)
}

/// Convert a double to a decimal representation with at most `max_digits`
/// significant digits.
///
/// Digits beyond the budget are removed with correct rounding: the digit at
/// the truncation boundary rounds to nearest, ties to even against the exact
/// binary value. The result is not necessarily round-trippable. A budget of
/// zero is treated as one digit.
pub fn rounded(value: f64, max_digits: usize) -> String {
    convert(value, DEFAULT_LOW_EXP, DEFAULT_HIGH_EXP, Some(max_digits.max(1)))
}

fn convert(value: f64, low_exp: i32, high_exp: i32, budget: Option<usize>) -> String {
    // trivial cases first
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value == f64::INFINITY {
        return "Infinity".to_owned();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_owned();
    }
    let bits = value.to_bits();
    if bits == 0 {
        return "0.0".to_owned();
    }
    if bits == 0x8000_0000_0000_0000 {
        return "-0.0".to_owned();
    }

    // unify the normal and subnormal decompositions
    let ieee_exponent = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    let ieee_mantissa = bits & MANTISSA_MASK;
    let (mut e2, m2) = if ieee_exponent == 0 {
        // subnormal: no implicit leading one, exponent pinned to the minimum
        (1 - EXPONENT_BIAS - MANTISSA_BITS as i32, ieee_mantissa)
    } else {
        (
            ieee_exponent - EXPONENT_BIAS - MANTISSA_BITS as i32,
            ieee_mantissa | (1 << MANTISSA_BITS),
        )
    };
    let sign = bits >> 63 != 0;

    // interval of information-preserving decimal outputs: mm and mp are the
    // halfway points to the adjacent representable doubles, scaled by 4 so
    // all three stay integral
    let even = m2 & 1 == 0;
    let mv = 4 * m2;
    let mp = 4 * m2 + 2;
    let mm_shift = u64::from(m2 != (1 << MANTISSA_BITS) || ieee_exponent <= 1);
    let mm = 4 * m2 - 1 - mm_shift;
    e2 -= 2;

    // scale the interval to a decimal power base with 128-bit products
    let tables = pow5::tables();
    let mut dv;
    let mut dp;
    let mut dm;
    let e10;
    let mut dm_is_trailing_zeros = false;
    let mut dv_is_trailing_zeros = false;
    if e2 >= 0 {
        let q = (((e2 as u32 * 78_913) >> 18) as i32 - 1).max(0);
        let k = POW5_INV_BITCOUNT + pow5_bits(q) - 1;
        let i = -e2 + q + k;
        let factor = tables.pow5_inv(q as usize);
        dv = mul_shift(mv, factor, i);
        dp = mul_shift(mp, factor, i);
        dm = mul_shift(mm, factor, i);
        e10 = q;

        if q <= 21 {
            if mv % 5 == 0 {
                dv_is_trailing_zeros = multiple_of_power_of_5(mv, q as u32);
            } else if even {
                dm_is_trailing_zeros = multiple_of_power_of_5(mm, q as u32);
            } else if multiple_of_power_of_5(mp, q as u32) {
                dp -= 1;
            }
        }
    } else {
        let q = ((((-e2) as u32 * 732_923) >> 20) as i32 - 1).max(0);
        let i = -e2 - q;
        let k = pow5_bits(i) - POW5_BITCOUNT;
        let j = q - k;
        let factor = tables.pow5(i as usize);
        dv = mul_shift(mv, factor, j);
        dp = mul_shift(mp, factor, j);
        dm = mul_shift(mm, factor, j);
        e10 = q + e2;

        if q <= 1 {
            // every digit removed from dv is zero
            dv_is_trailing_zeros = true;
            if even {
                dm_is_trailing_zeros = mm_shift == 1;
            } else {
                dp -= 1;
            }
        } else if q < 63 {
            dv_is_trailing_zeros = mv & ((1u64 << (q - 1)) - 1) == 0;
        }
    }

    // find the shortest representation in the interval, or keep stripping to
    // honor a caller-supplied digit budget
    let vplength = decimal_length(dp);
    let mut exp = e10 + vplength - 1;
    let mut scientific = !(exp >= low_exp && exp < high_exp);

    let mut removed: i32 = 0;
    let mut last_removed_digit: u8 = 0;
    let mut forced = false;
    let mut output: u64;
    if dm_is_trailing_zeros || dv_is_trailing_zeros {
        loop {
            let too_long = budget.is_some_and(|limit| (vplength - removed) as usize > limit);
            let within = dp / 10 > dm / 10;
            if !within && !too_long {
                break;
            }
            if dp < 100 && scientific && !too_long {
                // scientific notation prints at least two digits
                break;
            }
            if !within {
                forced = true;
            }
            dm_is_trailing_zeros &= dm % 10 == 0;
            dv_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = (dv % 10) as u8;
            dp /= 10;
            dv /= 10;
            dm /= 10;
            removed += 1;
        }
        if dm_is_trailing_zeros && even {
            loop {
                let too_long = budget.is_some_and(|limit| (vplength - removed) as usize > limit);
                if dm % 10 != 0 {
                    break;
                }
                if dp < 100 && scientific && !too_long {
                    break;
                }
                dv_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = (dv % 10) as u8;
                dp /= 10;
                dv /= 10;
                dm /= 10;
                removed += 1;
            }
        }
        if dv_is_trailing_zeros && last_removed_digit == 5 && dv % 2 == 0 {
            // exactly halfway, round to even
            last_removed_digit = 4;
        }
        output = dv
            + u64::from(
                (dv == dm && !forced && !(dm_is_trailing_zeros && even))
                    || last_removed_digit >= 5,
            );
    } else {
        loop {
            let too_long = budget.is_some_and(|limit| (vplength - removed) as usize > limit);
            let within = dp / 10 > dm / 10;
            if !within && !too_long {
                break;
            }
            if dp < 100 && scientific && !too_long {
                break;
            }
            if !within {
                forced = true;
            }
            last_removed_digit = (dv % 10) as u8;
            dp /= 10;
            dv /= 10;
            dm /= 10;
            removed += 1;
        }
        output = dv + u64::from((dv == dm && !forced) || last_removed_digit >= 5);
    }
    let mut olength = vplength - removed;

    if budget.is_some() {
        if decimal_length(output) > olength {
            // rounding carried into the next decade (e.g. 9.97 at two digits)
            output /= 10;
            exp += 1;
            scientific = !(exp >= low_exp && exp < high_exp);
        }
        // trailing zeros below the budget carry no information
        while olength > 1 && output % 10 == 0 {
            output /= 10;
            olength -= 1;
        }
    }

    // render the digits
    let n = olength as usize;
    let mut digits: ArrayVec<u8, 20> = ArrayVec::new();
    let mut rest = output;
    for _ in 0..n {
        digits.push(b'0' + (rest % 10) as u8);
        rest /= 10;
    }
    // digits holds the representation least-significant first

    let mut result = String::with_capacity(n + 10);
    if sign {
        result.push('-');
    }
    if scientific {
        result.push(char::from(digits[n - 1]));
        result.push('.');
        for &digit in digits[..n - 1].iter().rev() {
            result.push(char::from(digit));
        }
        if n == 1 {
            result.push('0');
        }
        result.push('E');
        result.push_str(&exp.to_string());
    } else if exp < 0 {
        // decimal dot before any digit
        result.push_str("0.");
        for _ in exp + 1..0 {
            result.push('0');
        }
        for &digit in digits.iter().rev() {
            result.push(char::from(digit));
        }
    } else if exp + 1 >= olength {
        // decimal dot after every digit
        for &digit in digits.iter().rev() {
            result.push(char::from(digit));
        }
        for _ in olength..exp + 1 {
            result.push('0');
        }
        result.push_str(".0");
    } else {
        // decimal dot between digits
        for (k, &digit) in digits.iter().rev().enumerate() {
            if k as i32 == exp + 1 {
                result.push('.');
            }
            result.push(char::from(digit));
        }
    }
    result
}

/// `floor(m * factor / 2^shift)`, exact for factors below 2^123 and
/// mantissas below 2^56.
#[inline]
fn mul_shift(m: u64, factor: u128, shift: i32) -> u64 {
    debug_assert!(shift > 64 && shift < 128);
    let low = u128::from(m) * (factor & u128::from(u64::MAX));
    let high = u128::from(m) * (factor >> 64);
    (((low >> 64) + high) >> (shift - 64)) as u64
}

/// Number of bits of 5^e.
#[inline]
fn pow5_bits(e: i32) -> i32 {
    ((e as u32 * 1_217_359) >> 19) as i32 + 1
}

/// Number of decimal digits of a non-zero value.
#[inline]
fn decimal_length(v: u64) -> i32 {
    debug_assert!(v > 0);
    (v.ilog10() + 1) as i32
}

fn multiple_of_power_of_5(value: u64, q: u32) -> bool {
    pow5_factor(value) >= q
}

/// Largest power of five dividing a non-zero value.
fn pow5_factor(mut value: u64) -> u32 {
    debug_assert!(value != 0);
    let mut count = 0;
    while value % 5 == 0 {
        value /= 5;
        count += 1;
    }
    count
}
