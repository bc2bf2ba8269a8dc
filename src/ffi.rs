//! C ABI entry points
//!
//! Every pointer is checked for null. A null pointer is logged as an error and the call returns its failure value:
//! nothing is written, `false`, `0.0`, a null pointer or `-1`.
//!
//! # Safety
//!
//! Non-null pointers must point to live values created by this library, e.g. vectors from [`trisect_vector3_allocate`].
//! Vector pointers must be 16-byte aligned. Every source is read before `dst` is written, so `dst` may point to a source.

use core::{ptr, slice};

use trisect_logging::log_error;
use trisect_math::*;

use crate::{LOG_CAT, Settings};

/// Index returned by [`trisect_closest_triangle`] when no triangle was hit
pub const NO_HIT : i32 = -1;

/// Triangle created over the host boundary
///
/// The triangle borrows the vectors it was created from, the host must keep them alive until the handle is freed.
pub struct TriangleHandle {
    triangle : Triangle<'static>,
}

impl TriangleHandle {
    pub fn triangle(&self) -> &Triangle<'static> {
        &self.triangle
    }
}

unsafe fn load(src: *const Vector3, param: &'static str) -> Result<Vector3> {
    src.as_ref().copied().ok_or(Error::NullPointer(param))
}

unsafe fn borrow<'a>(src: *const Vector3, param: &'static str) -> Result<&'a Vector3> {
    src.as_ref().ok_or(Error::NullPointer(param))
}

unsafe fn store(dst: *mut Vector3, value: Vector3) -> Result<()> {
    if dst.is_null() {
        return Err(Error::NullPointer("dst"));
    }
    dst.write(value);
    Ok(())
}

// Logs the error under the name of the entry point and returns the entry point's failure value
fn report<T, F>(func: F, result: Result<T>, failure: T) -> T {
    match result {
        Ok(val) => val,
        Err(err) => {
            log_error!(LOG_CAT, func, "{}", err);
            failure
        },
    }
}

//- vectors --------------------------------------------------------------------------------------------------------------------

/// Allocate a zero-initialized vector
#[no_mangle]
pub extern "C" fn trisect_vector3_allocate() -> *mut Vector3 {
    Box::into_raw(Box::new(Vector3::zero()))
}

/// Free a vector allocated with [`trisect_vector3_allocate`], freeing null is a no-op
///
/// # Safety
///
/// `ptr` must not be used after this call, and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_free(ptr: *mut Vector3) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Set the components of a vector
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_set(dst: *mut Vector3, x: f32, y: f32, z: f32) {
    report(trisect_vector3_set, store(dst, Vector3::new(x, y, z)), ())
}

/// Get a pointer to the 4 lanes of the vector, so the host can read the components from memory
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_elements(src: *const Vector3) -> *const f32 {
    let res = borrow(src, "src").map(|vec| vec.lanes().as_ptr());
    report(trisect_vector3_elements, res, ptr::null())
}

/// `dst = src0 + src1`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_add(dst: *mut Vector3, src0: *const Vector3, src1: *const Vector3) {
    let res = (|| -> Result<()> { store(dst, load(src0, "src0")?.add(load(src1, "src1")?)) })();
    report(trisect_vector3_add, res, ())
}

/// `dst = src0 - src1`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_sub(dst: *mut Vector3, src0: *const Vector3, src1: *const Vector3) {
    let res = (|| -> Result<()> { store(dst, load(src0, "src0")?.sub(load(src1, "src1")?)) })();
    report(trisect_vector3_sub, res, ())
}

/// `dst = src * factor`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_scale(dst: *mut Vector3, src: *const Vector3, factor: f32) {
    let res = (|| -> Result<()> { store(dst, load(src, "src")?.scale(factor)) })();
    report(trisect_vector3_scale, res, ())
}

/// `dst = src`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_store(dst: *mut Vector3, src: *const Vector3) {
    let res = (|| -> Result<()> { store(dst, load(src, "src")?) })();
    report(trisect_vector3_store, res, ())
}

/// `dst = src0 + src1 * factor`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_addscale(dst: *mut Vector3, src0: *const Vector3, src1: *const Vector3, factor: f32) {
    let res = (|| -> Result<()> { store(dst, load(src0, "src0")?.add_scale(load(src1, "src1")?, factor)) })();
    report(trisect_vector3_addscale, res, ())
}

/// `dot(src0, src1)`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_dot(src0: *const Vector3, src1: *const Vector3) -> f32 {
    let res = (|| -> Result<f32> { Ok(load(src0, "src0")?.dot(load(src1, "src1")?)) })();
    report(trisect_vector3_dot, res, 0.0)
}

/// `dot(src0, src1 - src2)`
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_vector3_dot_with_difference(src0: *const Vector3, src1: *const Vector3, src2: *const Vector3) -> f32 {
    let res = (|| -> Result<f32> { Ok(load(src0, "src0")?.dot_with_difference(load(src1, "src1")?, load(src2, "src2")?)) })();
    report(trisect_vector3_dot_with_difference, res, 0.0)
}

//- planes ---------------------------------------------------------------------------------------------------------------------

/// Intersect a ray with the plane through `offset` facing along `normal`, writing the hit point to `dst`
///
/// Returns `false` when the ray misses the plane, `dst` is left untouched in that case.
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_plane_intersect(
    ray_source: *const Vector3,
    ray_dir: *const Vector3,
    normal: *const Vector3,
    offset: *const Vector3,
    dst: *mut Vector3
) -> bool {
    let res = (|| -> Result<bool> {
        let hit = plane_intersect(load(ray_source, "ray_source")?, load(ray_dir, "ray_dir")?, load(normal, "normal")?, load(offset, "offset")?);
        match hit {
            Some(point) => store(dst, point).map(|_| true),
            None => Ok(false),
        }
    })();
    report(trisect_plane_intersect, res, false)
}

//- triangles ------------------------------------------------------------------------------------------------------------------

/// Create a triangle from a vertex and 2 sides starting at that vertex
///
/// When triangle validation is enabled in the [`Settings`], a degenerate triangle is rejected and null is returned.
///
/// # Safety
///
/// The vectors are borrowed by the triangle, they must stay alive and must not be freed until the triangle is freed.
#[no_mangle]
pub unsafe extern "C" fn trisect_triangle_create(offset: *const Vector3, side0: *const Vector3, side1: *const Vector3) -> *mut TriangleHandle {
    let res = (|| -> Result<*mut TriangleHandle> {
        let offset = borrow(offset, "offset")?;
        let side0 = borrow(side0, "side0")?;
        let side1 = borrow(side1, "side1")?;

        let triangle = if Settings::current().validate_triangles {
            Triangle::try_new(offset, side0, side1)?
        } else {
            Triangle::new(offset, side0, side1)
        };
        Ok(Box::into_raw(Box::new(TriangleHandle { triangle })))
    })();
    report(trisect_triangle_create, res, ptr::null_mut())
}

/// Free a triangle created with [`trisect_triangle_create`], freeing null is a no-op
///
/// # Safety
///
/// `handle` must not be used after this call, and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn trisect_triangle_free(handle: *mut TriangleHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Check if `point` lies inside the triangle
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_triangle_contains(point: *const Vector3, handle: *const TriangleHandle) -> bool {
    let res = (|| -> Result<bool> {
        let point = load(point, "point")?;
        let handle = handle.as_ref().ok_or(Error::NullPointer("handle"))?;
        Ok(handle.triangle.contains(point))
    })();
    report(trisect_triangle_contains, res, false)
}

/// Find the index of the first triangle hit by the ray, or [`NO_HIT`]
///
/// `triangles` points to an array of `count` handle pointers, as returned by [`trisect_triangle_create`].
/// It may be null when `count` is 0. A null entry fails the whole query.
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn trisect_closest_triangle(
    ray_source: *const Vector3,
    ray_dir: *const Vector3,
    triangles: *const *const TriangleHandle,
    count: usize
) -> i32 {
    let res = (|| -> Result<i32> {
        let ray_source = load(ray_source, "ray_source")?;
        let ray_dir = load(ray_dir, "ray_dir")?;

        let handles : &[*const TriangleHandle] = match count {
            0 => &[],
            _ if triangles.is_null() => return Err(Error::NullPointer("triangles")),
            _ => slice::from_raw_parts(triangles, count),
        };
        if handles.iter().any(|handle| handle.is_null()) {
            return Err(Error::NullPointer("triangles[]"));
        }
        let triangles = handles.iter().map(|&handle| &(*handle).triangle);

        Ok(closest_triangle(ray_source, ray_dir, triangles)
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(NO_HIT))
    })();
    report(trisect_closest_triangle, res, NO_HIT)
}

//- configuration --------------------------------------------------------------------------------------------------------------

/// Apply settings, passed as `len` bytes of utf-8 json
///
/// Returns `false` when the settings could not be parsed, the active settings are kept in that case.
///
/// # Safety
///
/// `json` must point to at least `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn trisect_configure(json: *const u8, len: usize) -> bool {
    let res = (|| -> Result<Settings> {
        if json.is_null() {
            return Err(Error::NullPointer("json"));
        }
        let bytes = slice::from_raw_parts(json, len);
        let json = core::str::from_utf8(bytes).map_err(|err| Error::InvalidSettings(err.to_string()))?;
        Settings::parse(json)
    })();

    match report(trisect_configure, res.map(Some), None) {
        Some(settings) => {
            settings.apply();
            true
        },
        None => false,
    }
}
