//! Integer helpers behind the numeric operations.
//!
//! Everything works on 64-bit integers and reports overflow instead of
//! wrapping, so a caller can turn it into a client error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("result exceeds the supported integer range")]
    Overflow,
}

/// First `count` Fibonacci numbers, starting `0, 1`.
pub fn fibonacci(count: u64) -> Result<Vec<u64>, MathError> {
    // `count` comes from the client; no reservation up front.
    let mut seq = Vec::new();
    let (mut a, mut b) = (0u64, 1u64);

    for _ in 0..count {
        seq.push(a);
        let next = a.checked_add(b);
        a = b;
        b = match next {
            Some(n) => n,
            // `b` is only needed if another term follows.
            None if (seq.len() as u64) + 1 < count => return Err(MathError::Overflow),
            None => 0,
        };
    }

    Ok(seq)
}

/// Trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Keep the primes, in input order.
pub fn primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&n| is_prime(n)).collect()
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub fn lcm(a: u64, b: u64) -> Result<u64, MathError> {
    let g = gcd(a, b);
    if g == 0 {
        return Ok(0);
    }
    (a / g).checked_mul(b).ok_or(MathError::Overflow)
}

/// Left fold of [`lcm`]. A single element comes back unchanged.
pub fn lcm_all(values: &[u64]) -> Option<Result<u64, MathError>> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().try_fold(first, |acc, &n| lcm(acc, n)))
}

/// Left fold of [`gcd`]. A single element comes back unchanged.
pub fn hcf_all(values: &[u64]) -> Option<u64> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &n| gcd(acc, n)))
}
