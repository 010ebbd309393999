/// One rectangular cell of the grid subdivision used to spatially
/// distribute structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub start_x: i32,
    pub start_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Divide a grid into `rows * cols` equal partitions, row-major order.
///
/// Each partition is `floor(W/cols) x floor(H/rows)`. When the grid does not
/// divide evenly, the remainder tiles along the right/bottom edge belong to
/// no partition and never receive structures. Known limitation, kept
/// deliberately.
pub fn plan_partitions(grid_width: i32, grid_height: i32, rows: i32, cols: i32) -> Vec<Partition> {
    let partition_width = grid_width / cols;
    let partition_height = grid_height / rows;

    let mut partitions = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            partitions.push(Partition {
                start_x: col * partition_width,
                start_y: row * partition_height,
                width: partition_width,
                height: partition_height,
            });
        }
    }
    partitions
}
