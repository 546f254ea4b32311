use std::{fs::File, io::Write, path::Path};

use rand::distributions::uniform::SampleUniform;
use rand::{
    distributions::{Distribution, Uniform},
    thread_rng, Rng,
};
use serde::{Deserialize, Serialize};

use crate::reference::PageId;

/// Generates a random integer within a specified range.
///
/// # Arguments
///
/// * `min` - The minimum value of the integer (inclusive).
/// * `max` - The maximum value of the integer (inclusive).
pub fn gen_random_int<T>(min: T, max: T) -> T
where
    T: SampleUniform,
{
    let mut rng = thread_rng();
    rng.sample(Uniform::new_inclusive(min, max))
}

/// A generated reference string. Serializable so a workload that trips an
/// invariant can be saved and replayed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomRefs {
    refs: Vec<PageId>,
}

impl RandomRefs {
    /// Every reference drawn uniformly from `0..num_pages`.
    pub fn uniform(num_refs: usize, num_pages: PageId) -> Self {
        let mut rng = thread_rng();
        let range = Uniform::new(0, num_pages.max(1));
        let refs = (0..num_refs).map(|_| range.sample(&mut rng)).collect();
        RandomRefs { refs }
    }

    /// References that mostly stay inside a sliding working set of
    /// `working_set` pages. With probability `locality` the next reference is
    /// taken from the working set, otherwise from all pages; each escape also
    /// moves the working set to start at the escaped page.
    pub fn with_locality(
        num_refs: usize,
        num_pages: PageId,
        working_set: PageId,
        locality: f64,
    ) -> Self {
        let mut rng = thread_rng();
        let num_pages = num_pages.max(1);
        let working_set = working_set.clamp(1, num_pages);
        let mut base: PageId = 0;
        let mut refs = Vec::with_capacity(num_refs);
        for _ in 0..num_refs {
            if rng.gen_bool(locality.clamp(0.0, 1.0)) {
                refs.push((base + rng.gen_range(0..working_set)) % num_pages);
            } else {
                let page = rng.gen_range(0..num_pages);
                base = page;
                refs.push(page);
            }
        }
        RandomRefs { refs }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.refs
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let bytes = serde_cbor::to_vec(self).map_err(|e| format!("Failed to encode: {}", e))?;
        let mut file = File::create(path.as_ref())
            .map_err(|e| format!("Failed to create {:?}: {}", path.as_ref(), e))?;
        file.write_all(&bytes)
            .map_err(|e| format!("Failed to write {:?}: {}", path.as_ref(), e))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("Failed to open {:?}: {}", path.as_ref(), e))?;
        serde_cbor::from_reader(file).map_err(|e| format!("Failed to decode: {}", e))
    }
}

impl From<Vec<PageId>> for RandomRefs {
    fn from(refs: Vec<PageId>) -> Self {
        RandomRefs { refs }
    }
}

impl std::ops::Index<usize> for RandomRefs {
    type Output = PageId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.refs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_pages_in_range() {
        let refs = RandomRefs::uniform(1000, 7);
        assert_eq!(refs.len(), 1000);
        assert!(refs.as_slice().iter().all(|&p| p < 7));
    }

    #[test]
    fn test_locality_pages_in_range() {
        let refs = RandomRefs::with_locality(1000, 50, 5, 0.9);
        assert_eq!(refs.len(), 1000);
        assert!(refs.as_slice().iter().all(|&p| p < 50));
    }

    #[test]
    fn test_full_locality_stays_in_first_window() {
        let refs = RandomRefs::with_locality(300, 50, 4, 1.0);
        assert!(refs.as_slice().iter().all(|&p| p < 4));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refs.dat");
        let refs = RandomRefs::uniform(64, 9);
        refs.save(&path).unwrap();
        assert_eq!(RandomRefs::load(&path).unwrap(), refs);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RandomRefs::load(dir.path().join("missing.dat")).is_err());
    }
}
