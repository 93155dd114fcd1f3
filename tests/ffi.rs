//! Smoke tests for the C-compatible surface.

use rrng::ffi::*;

#[test]
fn test_uniform_real_quartet() {
    unsafe {
        let handle = uniform_real_create(-10.0, 10.0);
        assert!(!handle.is_null());
        uniform_real_seed(handle, 42);

        let forward: Vec<f64> = (0..100).map(|_| uniform_real_next(handle)).collect();
        for &value in forward.iter() {
            assert!((-10.0..10.0).contains(&value));
        }
        for &value in forward.iter().rev() {
            assert_eq!(uniform_real_previous(handle), value);
        }

        uniform_real_destroy(handle);
    }
}

#[test]
fn test_uniform_real_rejects_invalid_bounds() {
    unsafe {
        let handle = uniform_real_create(10.0, -10.0);
        assert!(handle.is_null());
        // Destroying a null handle is a no-op, as on the C side.
        uniform_real_destroy(handle);
    }
}

#[test]
fn test_uniform_int_arrays_mirror() {
    unsafe {
        let handle = uniform_int_create(-10, 10);
        assert!(!handle.is_null());
        uniform_int_seed(handle, 42);

        let mut forward = [0i32; 64];
        uniform_int_next_array(handle, forward.as_mut_ptr(), forward.len());
        for &value in forward.iter() {
            assert!((-10..=10).contains(&value));
        }

        // The backward array fills from the tail, returning the same
        // values in the same slots.
        let mut backward = [0i32; 64];
        uniform_int_previous_array(handle, backward.as_mut_ptr(), backward.len());
        assert_eq!(forward, backward);

        uniform_int_destroy(handle);
    }
}

#[test]
fn test_normal_quartet() {
    unsafe {
        let handle = normal_create(5.0, 2.0);
        assert!(!handle.is_null());
        normal_seed(handle, 42);

        let mut forward = [0.0f64; 128];
        normal_next_array(handle, forward.as_mut_ptr(), forward.len());
        for &value in forward.iter() {
            assert!(value.is_finite());
        }

        let mut backward = [0.0f64; 128];
        normal_previous_array(handle, backward.as_mut_ptr(), backward.len());
        assert_eq!(forward, backward);

        normal_destroy(handle);
    }
}

#[test]
fn test_normal_rejects_invalid_stddev() {
    unsafe {
        assert!(normal_create(0.0, 0.0).is_null());
        assert!(normal_create(0.0, -1.0).is_null());
    }
}

#[test]
fn test_exponential_quartet() {
    unsafe {
        let handle = exponential_create(1.5);
        assert!(!handle.is_null());
        exponential_seed(handle, 42);

        let first = exponential_next(handle);
        assert!(first >= 0.0);
        assert_eq!(exponential_previous(handle), first);

        exponential_destroy(handle);
    }
}

#[test]
fn test_exponential_rejects_invalid_lambda() {
    unsafe {
        assert!(exponential_create(0.0).is_null());
    }
}

#[test]
fn test_seed_makes_handles_agree() {
    unsafe {
        let a = normal_create(0.0, 1.0);
        let b = normal_create(0.0, 1.0);
        normal_seed(a, 7);
        normal_seed(b, 7);
        for _ in 0..100 {
            assert_eq!(normal_next(a), normal_next(b));
        }
        normal_destroy(a);
        normal_destroy(b);
    }
}

#[test]
fn test_null_handles_are_inert() {
    unsafe {
        assert!(uniform_real_next(std::ptr::null_mut()).is_nan());
        assert_eq!(uniform_int_next(std::ptr::null_mut()), 0);
        assert!(normal_previous(std::ptr::null_mut()).is_nan());
        uniform_real_seed(std::ptr::null_mut(), 1);
        exponential_destroy(std::ptr::null_mut());
    }
}
