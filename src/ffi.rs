//! C-compatible bindings for the reversible generators.
//!
//! One handle-based quartet per distribution: create/destroy manage a
//! heap-allocated composite generator behind an opaque pointer, and the
//! remaining calls draw scalars or fill caller-provided arrays in either
//! direction. All functions null-check their handle; `create` returns a
//! null pointer when the distribution parameters are invalid.

use std::slice;

use crate::dist::{Exponential, Normal, UniformInt, UniformReal};
use crate::rng::{ExponentialRng, NormalRng, ReversibleRng, UniformIntRng, UniformRealRng};

/// Opaque reversible uniform real generator.
pub struct FfiUniformReal {
    inner: UniformRealRng<f64>,
}

/// Opaque reversible uniform integer generator.
pub struct FfiUniformInt {
    inner: UniformIntRng<i32>,
}

/// Opaque reversible normal generator.
pub struct FfiNormal {
    inner: NormalRng<f64>,
}

/// Opaque reversible exponential generator.
pub struct FfiExponential {
    inner: ExponentialRng<f64>,
}

// Reversible uniform real generator

/// Creates a uniform real generator on `[a, b)`, seeded from the platform
/// entropy source. Returns null if `a > b` or a bound is not a number.
///
/// # Safety
/// The caller owns the returned pointer and must release it with
/// [`uniform_real_destroy`].
#[no_mangle]
pub unsafe extern "C" fn uniform_real_create(a: f64, b: f64) -> *mut FfiUniformReal {
    match UniformReal::new(a, b) {
        Ok(dist) => Box::into_raw(Box::new(FfiUniformReal {
            inner: ReversibleRng::new(dist),
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a generator created by [`uniform_real_create`].
///
/// # Safety
/// `handle` must come from [`uniform_real_create`] and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn uniform_real_destroy(handle: *mut FfiUniformReal) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Reseeds the generator and resets its position.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_real_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_real_seed(handle: *mut FfiUniformReal, seed: u64) {
    if let Some(rng) = handle.as_mut() {
        rng.inner.seed(seed);
    }
}

/// Returns the next value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_real_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_real_next(handle: *mut FfiUniformReal) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.next().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Returns the previous value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_real_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_real_previous(handle: *mut FfiUniformReal) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.previous().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Fills `buffer[0..len)` with successive forward draws.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn uniform_real_next_array(
    handle: *mut FfiUniformReal,
    buffer: *mut f64,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len) {
        *slot = rng.inner.next().unwrap_or(f64::NAN);
    }
}

/// Fills `buffer[len-1..0]` with successive backward draws, leaving the
/// buffer in logical natural order.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn uniform_real_previous_array(
    handle: *mut FfiUniformReal,
    buffer: *mut f64,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len).iter_mut().rev() {
        *slot = rng.inner.previous().unwrap_or(f64::NAN);
    }
}

// Reversible uniform integer generator

/// Creates a uniform integer generator on `[a, b]`, seeded from the
/// platform entropy source. Returns null if `a > b`.
///
/// # Safety
/// The caller owns the returned pointer and must release it with
/// [`uniform_int_destroy`].
#[no_mangle]
pub unsafe extern "C" fn uniform_int_create(a: i32, b: i32) -> *mut FfiUniformInt {
    match UniformInt::new(a, b) {
        Ok(dist) => Box::into_raw(Box::new(FfiUniformInt {
            inner: ReversibleRng::new(dist),
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a generator created by [`uniform_int_create`].
///
/// # Safety
/// `handle` must come from [`uniform_int_create`] and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn uniform_int_destroy(handle: *mut FfiUniformInt) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Reseeds the generator and resets its position.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_int_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_int_seed(handle: *mut FfiUniformInt, seed: u64) {
    if let Some(rng) = handle.as_mut() {
        rng.inner.seed(seed);
    }
}

/// Returns the next value, or 0 on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_int_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_int_next(handle: *mut FfiUniformInt) -> i32 {
    match handle.as_mut() {
        Some(rng) => rng.inner.next().unwrap_or(0),
        None => 0,
    }
}

/// Returns the previous value, or 0 on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`uniform_int_create`].
#[no_mangle]
pub unsafe extern "C" fn uniform_int_previous(handle: *mut FfiUniformInt) -> i32 {
    match handle.as_mut() {
        Some(rng) => rng.inner.previous().unwrap_or(0),
        None => 0,
    }
}

/// Fills `buffer[0..len)` with successive forward draws.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// 32-bit integers.
#[no_mangle]
pub unsafe extern "C" fn uniform_int_next_array(
    handle: *mut FfiUniformInt,
    buffer: *mut i32,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len) {
        *slot = rng.inner.next().unwrap_or(0);
    }
}

/// Fills `buffer[len-1..0]` with successive backward draws, leaving the
/// buffer in logical natural order.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// 32-bit integers.
#[no_mangle]
pub unsafe extern "C" fn uniform_int_previous_array(
    handle: *mut FfiUniformInt,
    buffer: *mut i32,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len).iter_mut().rev() {
        *slot = rng.inner.previous().unwrap_or(0);
    }
}

// Reversible normal generator

/// Creates a normal generator, seeded from the platform entropy source.
/// Returns null unless `stddev > 0`.
///
/// # Safety
/// The caller owns the returned pointer and must release it with
/// [`normal_destroy`].
#[no_mangle]
pub unsafe extern "C" fn normal_create(mean: f64, stddev: f64) -> *mut FfiNormal {
    match Normal::new(mean, stddev) {
        Ok(dist) => Box::into_raw(Box::new(FfiNormal {
            inner: ReversibleRng::new(dist),
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a generator created by [`normal_create`].
///
/// # Safety
/// `handle` must come from [`normal_create`] and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn normal_destroy(handle: *mut FfiNormal) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Reseeds the generator and resets its position.
///
/// # Safety
/// `handle` must be a live pointer from [`normal_create`].
#[no_mangle]
pub unsafe extern "C" fn normal_seed(handle: *mut FfiNormal, seed: u64) {
    if let Some(rng) = handle.as_mut() {
        rng.inner.seed(seed);
    }
}

/// Returns the next value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`normal_create`].
#[no_mangle]
pub unsafe extern "C" fn normal_next(handle: *mut FfiNormal) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.next().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Returns the previous value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`normal_create`].
#[no_mangle]
pub unsafe extern "C" fn normal_previous(handle: *mut FfiNormal) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.previous().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Fills `buffer[0..len)` with successive forward draws.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn normal_next_array(handle: *mut FfiNormal, buffer: *mut f64, len: usize) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len) {
        *slot = rng.inner.next().unwrap_or(f64::NAN);
    }
}

/// Fills `buffer[len-1..0]` with successive backward draws, leaving the
/// buffer in logical natural order.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn normal_previous_array(
    handle: *mut FfiNormal,
    buffer: *mut f64,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len).iter_mut().rev() {
        *slot = rng.inner.previous().unwrap_or(f64::NAN);
    }
}

// Reversible exponential generator

/// Creates an exponential generator, seeded from the platform entropy
/// source. Returns null unless `lambda > 0`.
///
/// # Safety
/// The caller owns the returned pointer and must release it with
/// [`exponential_destroy`].
#[no_mangle]
pub unsafe extern "C" fn exponential_create(lambda: f64) -> *mut FfiExponential {
    match Exponential::new(lambda) {
        Ok(dist) => Box::into_raw(Box::new(FfiExponential {
            inner: ReversibleRng::new(dist),
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a generator created by [`exponential_create`].
///
/// # Safety
/// `handle` must come from [`exponential_create`] and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn exponential_destroy(handle: *mut FfiExponential) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Reseeds the generator and resets its position.
///
/// # Safety
/// `handle` must be a live pointer from [`exponential_create`].
#[no_mangle]
pub unsafe extern "C" fn exponential_seed(handle: *mut FfiExponential, seed: u64) {
    if let Some(rng) = handle.as_mut() {
        rng.inner.seed(seed);
    }
}

/// Returns the next value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`exponential_create`].
#[no_mangle]
pub unsafe extern "C" fn exponential_next(handle: *mut FfiExponential) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.next().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Returns the previous value, or NaN on a null handle.
///
/// # Safety
/// `handle` must be a live pointer from [`exponential_create`].
#[no_mangle]
pub unsafe extern "C" fn exponential_previous(handle: *mut FfiExponential) -> f64 {
    match handle.as_mut() {
        Some(rng) => rng.inner.previous().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Fills `buffer[0..len)` with successive forward draws.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn exponential_next_array(
    handle: *mut FfiExponential,
    buffer: *mut f64,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len) {
        *slot = rng.inner.next().unwrap_or(f64::NAN);
    }
}

/// Fills `buffer[len-1..0]` with successive backward draws, leaving the
/// buffer in logical natural order.
///
/// # Safety
/// `handle` must be live and `buffer` must point to `len` writable
/// doubles.
#[no_mangle]
pub unsafe extern "C" fn exponential_previous_array(
    handle: *mut FfiExponential,
    buffer: *mut f64,
    len: usize,
) {
    let rng = match handle.as_mut() {
        Some(rng) => rng,
        None => return,
    };
    if buffer.is_null() {
        return;
    }
    for slot in slice::from_raw_parts_mut(buffer, len).iter_mut().rev() {
        *slot = rng.inner.previous().unwrap_or(f64::NAN);
    }
}
