/// B3/S23: birth on exactly three neighbours, survival on two or three.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // under/overpopulation, or stays dead
    }
}
