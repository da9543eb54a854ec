/// First twelve primes; as Miller-Rabin bases they decide every n < 3.3e24.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub(crate) fn mulmod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

pub(crate) fn modpow(mut a: u64, mut n: u64, p: u64) -> u64 {
    let mut res = 1 % p;
    a %= p;
    while n > 0 {
        if n % 2 == 1 {
            res = mulmod(res, a, p);
        }
        a = mulmod(a, a, p);
        n /= 2;
    }
    res
}

/// Deterministic miller rabin prime test, exact for every `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for a in WITNESSES {
        if n == a {
            return true;
        }
        if n % a == 0 {
            return false;
        }
    }

    // n-1 = 2^k * q, with q odd
    let (k, q) = {
        let mut k = 0;
        let mut q = n - 1;
        while q % 2 == 0 {
            k += 1;
            q /= 2;
        }
        (k, q)
    };

    'witness: for a in WITNESSES {
        // a = a^q mod n. If a == 1, no information.
        let mut a = modpow(a, q, n);
        if a == 1 || a == n - 1 {
            continue;
        }
        for _ in 1..k {
            a = mulmod(a, a, n);
            if a == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
