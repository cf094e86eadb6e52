//! Record generator producing one synthetic row per call.

use crate::generators::generate_for_column;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seeder_core::{Column, Record, SeedValue, TableSchema};

/// Data generator that produces synthetic records for a table schema.
///
/// Values depend only on each column's semantic type, its declared width and
/// the generator's RNG.
/// Nothing is remembered between calls: no uniqueness, no cross-column
/// relationships.
pub struct DataGenerator {
    /// Random number generator, seeded or from OS entropy
    rng: StdRng,
}

impl DataGenerator {
    /// Create a deterministic generator (same seed = same values).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create the generator for one worker.
    ///
    /// With a base seed, worker `i` is seeded with `seed + i` so workers do not
    /// produce identical rows.
    pub fn for_worker(base_seed: Option<u64>, worker: usize) -> Self {
        match base_seed {
            Some(seed) => Self::new(seed.wrapping_add(worker as u64)),
            None => Self::from_entropy(),
        }
    }

    /// Generate one value for the given column.
    pub fn generate(&mut self, column: &Column) -> SeedValue {
        generate_for_column(column, &mut self.rng)
    }

    /// Generate one record covering every column of the schema, in order.
    pub fn generate_record(&mut self, schema: &TableSchema) -> Record {
        let mut record = Record::with_capacity(schema.len());
        for column in &schema.columns {
            let value = self.generate(column);
            record.push(column.name.clone(), value);
        }
        record
    }

    /// Lazily generate `count` records for the schema.
    pub fn records<'a>(&'a mut self, schema: &'a TableSchema, count: u64) -> RecordIterator<'a> {
        RecordIterator {
            generator: self,
            schema,
            count,
            remaining: count,
        }
    }
}

/// Finite, restartable iterator over generated records.
pub struct RecordIterator<'a> {
    generator: &'a mut DataGenerator,
    schema: &'a TableSchema,
    count: u64,
    remaining: u64,
}

impl RecordIterator<'_> {
    /// Rewind so the iterator yields `count` fresh records again.
    pub fn restart(&mut self) {
        self.remaining = self.count;
    }

    /// Total number of records per pass.
    pub fn count_per_pass(&self) -> u64 {
        self.count
    }
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_record(self.schema))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
