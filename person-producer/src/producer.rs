use std::iter::FusedIterator;

use log::debug;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::person::{Person, Pools};

/// Materializes all `count` records before returning.
pub fn collect_people<'p, R: Rng + ?Sized>(
    count: u64,
    pools: Pools<'p>,
    rng: &mut R,
) -> Vec<Person<'p>> {
    debug!("Materializing {} people", count);
    let mut people = Vec::with_capacity(usize::try_from(count).unwrap_or_default());
    for id in 0..count {
        people.push(pools.draw(id, rng));
    }
    people
}

/// Returns a fresh iterator over `count` records, drawing each one only when it is requested.
#[must_use]
pub fn stream_people<'p, R: Rng>(count: u64, pools: Pools<'p>, rng: R) -> PersonIter<'p, R> {
    debug!("Streaming {} people", count);
    PersonIter {
        pools,
        rng,
        next_id: 0,
        count,
    }
}

/// [`collect_people`] over the default pools and the thread-local generator.
#[must_use]
pub fn produce_all(count: u64) -> Vec<Person<'static>> {
    collect_people(count, Pools::default(), &mut thread_rng())
}

/// [`stream_people`] over the default pools and the thread-local generator.
#[must_use]
pub fn produce_lazy(count: u64) -> PersonIter<'static, ThreadRng> {
    stream_people(count, Pools::default(), thread_rng())
}

/// Lazily generated records. Holds only the next id and the generator between yields.
#[derive(Debug)]
pub struct PersonIter<'p, R> {
    pools: Pools<'p>,
    rng: R,
    next_id: u64,
    count: u64,
}

impl<R> PersonIter<'_, R> {
    fn remaining(&self) -> u64 {
        self.count - self.next_id
    }
}

impl<'p, R: Rng> Iterator for PersonIter<'p, R> {
    type Item = Person<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_id >= self.count {
            return None;
        }
        let person = self.pools.draw(self.next_id, &mut self.rng);
        self.next_id += 1;
        Some(person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<R: Rng> FusedIterator for PersonIter<'_, R> {}
