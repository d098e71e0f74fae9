use glam::UVec3;

use crate::{error::ChunkError, voxels::coord::ChunkDimensions};

/// Deferred instruction to create the voxel at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkItem {
    pub pos: UVec3,
}

/// A slab of the chunk `[start_x, end_x)` spanning the full Y and Z extent,
/// assigned to a single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub index: usize,
    pub start_x: u32,
    pub end_x: u32,
}

impl Band {
    pub fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    pub fn is_empty(&self) -> bool {
        self.start_x == self.end_x
    }

    pub fn len(&self, dimensions: ChunkDimensions) -> usize {
        self.width() as usize * dimensions.depth_y() as usize * dimensions.size_z() as usize
    }

    /// Every coordinate in the band: X outermost, then Y, then Z.
    pub fn work_items(&self, dimensions: ChunkDimensions) -> impl Iterator<Item = WorkItem> {
        let depth_y = dimensions.depth_y();
        let size_z = dimensions.size_z();

        (self.start_x..self.end_x).flat_map(move |x| {
            (0..depth_y).flat_map(move |y| {
                (0..size_z).map(move |z| WorkItem {
                    pos: UVec3::new(x, y, z),
                })
            })
        })
    }
}

/// Splits the X axis into `worker_count` bands of `ceil(size_x / worker_count)` voxels.
/// The last non-empty band is clipped to the chunk, and workers past the end of the chunk
/// get empty bands.
pub fn partition(dimensions: ChunkDimensions, worker_count: usize) -> Result<Vec<Band>, ChunkError> {
    dimensions.validate()?;
    if worker_count == 0 {
        return Err(ChunkError::InvalidWorkerCount(worker_count));
    }

    let size_x = dimensions.size_x();
    // More workers than u32::MAX means every band is at most one voxel wide anyway
    let workers = u32::try_from(worker_count).unwrap_or(u32::MAX);
    let band_width = size_x.div_ceil(workers);

    let bands = (0..worker_count)
        .map(|index| {
            let start_x = u32::try_from(index)
                .map_or(size_x, |i| i.saturating_mul(band_width).min(size_x));
            let end_x = start_x.saturating_add(band_width).min(size_x);
            Band {
                index,
                start_x,
                end_x,
            }
        })
        .collect();

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn widths(bands: &[Band]) -> Vec<u32> {
        bands.iter().map(Band::width).collect()
    }

    #[test]
    fn test_one_band_per_worker_when_evenly_divisible() {
        let bands = partition(ChunkDimensions::new(8, 24, 8), 8).unwrap();
        assert_eq!(bands.len(), 8);
        assert_eq!(widths(&bands), vec![1; 8]);
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.start_x, i as u32);
        }
    }

    #[test]
    fn test_last_band_absorbs_remainder() {
        let bands = partition(ChunkDimensions::new(8, 24, 8), 3).unwrap();
        assert_eq!(widths(&bands), vec![3, 3, 2]);
        assert_eq!(bands[0].start_x, 0);
        assert_eq!(bands[1].start_x, 3);
        assert_eq!(bands[2].start_x, 6);
        assert_eq!(bands[2].end_x, 8);
    }

    #[test]
    fn test_extra_workers_get_empty_bands() {
        let dims = ChunkDimensions::new(3, 2, 2);
        let bands = partition(dims, 5).unwrap();
        assert_eq!(widths(&bands), vec![1, 1, 1, 0, 0]);
        assert!(bands[4].is_empty());
        assert_eq!(bands[4].work_items(dims).count(), 0);
    }

    #[test]
    fn test_zero_workers_is_a_configuration_error() {
        assert!(matches!(
            partition(ChunkDimensions::new(8, 24, 8), 0),
            Err(ChunkError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_invalid_dimensions_fail_at_partition_time() {
        assert!(matches!(
            partition(ChunkDimensions::new(0, 3, 1), 2),
            Err(ChunkError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_bands_cover_every_coordinate_exactly_once() {
        for dims in [
            ChunkDimensions::new(1, 1, 1),
            ChunkDimensions::new(2, 2, 2),
            ChunkDimensions::new(7, 3, 2),
            ChunkDimensions::new(8, 24, 8),
            ChunkDimensions::new(10, 1, 3),
        ] {
            for worker_count in 1..=12 {
                let bands = partition(dims, worker_count).unwrap();
                assert_eq!(bands.len(), worker_count);

                let mut seen = HashSet::new();
                for band in &bands {
                    for item in band.work_items(dims) {
                        assert!(dims.contains(item.pos));
                        assert!(
                            seen.insert(item.pos),
                            "{:?} enumerated twice ({dims:?}, {worker_count} workers)",
                            item.pos
                        );
                    }
                }
                assert_eq!(seen.len(), dims.volume());
            }
        }
    }

    #[test]
    fn test_enumeration_order_is_x_then_y_then_z() {
        let dims = ChunkDimensions::new(2, 2, 2);
        let band = Band {
            index: 0,
            start_x: 0,
            end_x: 2,
        };
        let positions = band
            .work_items(dims)
            .map(|item| item.pos.to_array())
            .collect::<Vec<_>>();

        assert_eq!(
            positions,
            vec![
                [0, 0, 0],
                [0, 0, 1],
                [0, 1, 0],
                [0, 1, 1],
                [1, 0, 0],
                [1, 0, 1],
                [1, 1, 0],
                [1, 1, 1],
            ]
        );
        assert_eq!(band.len(dims), 8);
    }
}
