use std::fmt;

use rand::Rng;

use crate::error::ProducerError;

pub const NAMES: [&str; 4] = ["Juan", "Ana", "Alicia", "Roberto"];
pub const MAJORS: [&str; 4] = ["Ingeniería", "Medicina", "Derecho", "Arquitectura"];
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 30;

/// One synthetic record. `name` and `major` borrow from the [Pools] they were drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person<'p> {
    pub id: u64,
    pub name: &'p str,
    pub major: &'p str,
    pub age: u8,
}

/// The categorical values a [Person] is sampled from.
///
/// A `Pools` is always non-empty with `min_age <= max_age`, so drawing from it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pools<'p> {
    names: &'p [&'p str],
    majors: &'p [&'p str],
    min_age: u8,
    max_age: u8,
}

impl<'p> Pools<'p> {
    /// # Errors
    /// Errors when either pool is empty or when `min_age` > `max_age`
    pub fn new(
        names: &'p [&'p str],
        majors: &'p [&'p str],
        min_age: u8,
        max_age: u8,
    ) -> Result<Self, ProducerError> {
        if names.is_empty() || majors.is_empty() {
            return Err(ProducerError::EmptyPool);
        }
        if min_age > max_age {
            return Err(ProducerError::InvalidAgeRange);
        }
        Ok(Pools {
            names,
            majors,
            min_age,
            max_age,
        })
    }

    #[must_use]
    pub fn names(&self) -> &'p [&'p str] {
        self.names
    }

    #[must_use]
    pub fn majors(&self) -> &'p [&'p str] {
        self.majors
    }

    #[must_use]
    pub fn ages(&self) -> std::ops::RangeInclusive<u8> {
        self.min_age..=self.max_age
    }

    /// Samples a single record with the given `id`. Consumes three draws from `rng`.
    pub fn draw<R: Rng + ?Sized>(&self, id: u64, rng: &mut R) -> Person<'p> {
        let name = self.names[rng.gen_range(0..self.names.len())];
        let major = self.majors[rng.gen_range(0..self.majors.len())];
        let age = rng.gen_range(self.min_age..=self.max_age);
        Person {
            id,
            name,
            major,
            age,
        }
    }
}

impl Default for Pools<'static> {
    fn default() -> Self {
        Pools {
            names: &NAMES,
            majors: &MAJORS,
            min_age: MIN_AGE,
            max_age: MAX_AGE,
        }
    }
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'id': {}, 'nombre': '{}', 'carrera': '{}', 'edad': {}}}",
            self.id, self.name, self.major, self.age
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pools_validation() {
        assert!(matches!(
            Pools::new(&[], &MAJORS, MIN_AGE, MAX_AGE),
            Err(ProducerError::EmptyPool)
        ));
        assert!(matches!(
            Pools::new(&NAMES, &[], MIN_AGE, MAX_AGE),
            Err(ProducerError::EmptyPool)
        ));
        assert!(matches!(
            Pools::new(&NAMES, &MAJORS, 31, 30),
            Err(ProducerError::InvalidAgeRange)
        ));
        let pools = Pools::new(&NAMES, &MAJORS, MIN_AGE, MAX_AGE).unwrap();
        assert_eq!(pools, Pools::default());
        assert_eq!(pools.ages(), 18..=30);
    }

    #[test]
    fn test_draw_stays_in_pools() {
        let pools = Pools::default();
        let mut rng = StdRng::seed_from_u64(7);
        for id in 0..2_000 {
            let person = pools.draw(id, &mut rng);
            assert_eq!(person.id, id);
            assert!(NAMES.contains(&person.name));
            assert!(MAJORS.contains(&person.major));
            assert!((18..=30).contains(&person.age));
        }
    }

    #[test]
    fn test_draw_covers_every_value() {
        let pools = Pools::default();
        let mut rng = StdRng::seed_from_u64(11);
        let people: Vec<_> = (0..5_000).map(|id| pools.draw(id, &mut rng)).collect();
        for name in NAMES {
            assert!(people.iter().any(|p| p.name == name));
        }
        for major in MAJORS {
            assert!(people.iter().any(|p| p.major == major));
        }
        for age in MIN_AGE..=MAX_AGE {
            assert!(people.iter().any(|p| p.age == age));
        }
    }

    #[test]
    fn test_single_value_pools() {
        let names = ["Solo"];
        let majors = ["Física"];
        let pools = Pools::new(&names, &majors, 21, 21).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let person = pools.draw(3, &mut rng);
        assert_eq!(
            person,
            Person {
                id: 3,
                name: "Solo",
                major: "Física",
                age: 21
            }
        );
    }

    #[test]
    fn test_display_matches_report_format() {
        let person = Person {
            id: 10_000,
            name: "Ana",
            major: "Ingeniería",
            age: 25,
        };
        assert_eq!(
            person.to_string(),
            "{'id': 10000, 'nombre': 'Ana', 'carrera': 'Ingeniería', 'edad': 25}"
        );
    }
}
