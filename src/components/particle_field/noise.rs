//! Seedless 3D gradient noise.
//!
//! Classic improved-Perlin construction over the reference permutation table.
//! The table is indexed modulo 256, which behaves exactly like the usual
//! doubled 512-entry table, so the field repeats every 256 units on each axis.

#[rustfmt::skip]
const PERMUTATION: [u8; 256] = [
	151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
	140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
	247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
	57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
	74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
	60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
	65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
	200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
	52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
	207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
	119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
	129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
	218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
	81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
	184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
	222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Samples the noise field at `(x, y, z)`.
///
/// The result is continuous in every argument, roughly within `[-1, 1]`, and
/// exactly zero on integer lattice points.
pub fn noise3(x: f64, y: f64, z: f64) -> f64 {
	let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
	let (xi, yi, zi) = (lattice(x0), lattice(y0), lattice(z0));
	let (x, y, z) = (x - x0, y - y0, z - z0);
	let (u, v, w) = (fade(x), fade(y), fade(z));

	let a = perm(xi) + yi;
	let (aa, ab) = (perm(a) + zi, perm(a + 1) + zi);
	let b = perm(xi + 1) + yi;
	let (ba, bb) = (perm(b) + zi, perm(b + 1) + zi);

	let near = lerp(
		v,
		lerp(u, grad(perm(aa), x, y, z), grad(perm(ba), x - 1.0, y, z)),
		lerp(
			u,
			grad(perm(ab), x, y - 1.0, z),
			grad(perm(bb), x - 1.0, y - 1.0, z),
		),
	);
	let far = lerp(
		v,
		lerp(
			u,
			grad(perm(aa + 1), x, y, z - 1.0),
			grad(perm(ba + 1), x - 1.0, y, z - 1.0),
		),
		lerp(
			u,
			grad(perm(ab + 1), x, y - 1.0, z - 1.0),
			grad(perm(bb + 1), x - 1.0, y - 1.0, z - 1.0),
		),
	);

	lerp(w, near, far)
}

/// Wraps a floored coordinate onto the 256-cell lattice (two's complement,
/// so `-1` maps to `255`).
fn lattice(floored: f64) -> usize {
	(floored as i64 & 255) as usize
}

fn perm(i: usize) -> usize {
	PERMUTATION[i & 255] as usize
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
fn fade(t: f64) -> f64 {
	t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
	a + t * (b - a)
}

/// Dot product with one of the 12 cube-edge gradients picked by `hash`.
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
	let h = hash & 15;
	let u = if h < 8 { x } else { y };
	let v = if h < 4 {
		y
	} else if h == 12 || h == 14 {
		x
	} else {
		z
	};
	let u = if h & 1 == 0 { u } else { -u };
	let v = if h & 2 == 0 { v } else { -v };
	u + v
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_grid() -> impl Iterator<Item = (f64, f64, f64)> {
		(0..12).flat_map(|i| {
			(0..12).map(move |j| {
				let x = i as f64 * 0.37 - 2.0;
				let y = j as f64 * 0.53 - 3.0;
				(x, y, (i + j) as f64 * 0.011)
			})
		})
	}

	#[test]
	fn same_input_gives_same_output() {
		for (x, y, z) in sample_grid() {
			assert_eq!(noise3(x, y, z).to_bits(), noise3(x, y, z).to_bits());
		}
	}

	#[test]
	fn small_steps_give_small_changes() {
		let eps = 0.0009;
		for (x, y, z) in sample_grid() {
			let base = noise3(x, y, z);
			for (dx, dy, dz) in [(eps, 0.0, 0.0), (0.0, eps, 0.0), (0.0, 0.0, eps)] {
				let moved = noise3(x + dx, y + dy, z + dz);
				assert!(
					(moved - base).abs() < 0.1,
					"jump of {} at ({x}, {y}, {z})",
					(moved - base).abs()
				);
			}
		}
	}

	#[test]
	fn lattice_points_are_zero() {
		assert_eq!(noise3(0.0, 0.0, 0.0), 0.0);
		assert_eq!(noise3(3.0, -7.0, 12.0), 0.0);
	}

	#[test]
	fn output_stays_near_unit_range() {
		for i in 0..40 {
			for j in 0..40 {
				let n = noise3(i as f64 * 0.173, j as f64 * 0.291, 0.5 + i as f64 * 0.01);
				assert!((-1.1..=1.1).contains(&n), "{n} out of range");
			}
		}
	}

	#[test]
	fn field_repeats_every_256_units() {
		let (x, y, z) = (1.25, 2.5, 0.75);
		let a = noise3(x, y, z);
		let b = noise3(x + 256.0, y, z);
		assert!((a - b).abs() < 1e-9);
	}

	#[test]
	fn negative_coordinates_are_continuous_across_zero() {
		let left = noise3(-0.0001, 0.3, 0.2);
		let right = noise3(0.0001, 0.3, 0.2);
		assert!((left - right).abs() < 0.01);
	}

	#[test]
	fn field_is_not_flat() {
		let values: Vec<f64> = sample_grid().map(|(x, y, z)| noise3(x, y, z)).collect();
		let spread = values.iter().cloned().fold(f64::MIN, f64::max)
			- values.iter().cloned().fold(f64::MAX, f64::min);
		assert!(spread > 0.2);
	}
}
