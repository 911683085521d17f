//! Marked enums. Scanned by `build.rs`.

use correlation::correlation_repository;

#[correlation_repository]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotatedClass {
    First,
    Second,
}

impl AnnotatedClass {
    pub fn get_f(&self) -> i64 {
        match self {
            AnnotatedClass::First => 1,
            AnnotatedClass::Second => 2,
        }
    }

    pub fn get_s(&self) -> &str {
        match self {
            AnnotatedClass::First => "10",
            AnnotatedClass::Second => "20",
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/model/annotated_class_repository.rs"));

pub mod solar {
    use correlation::correlation_repository;

    #[correlation_repository]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Planet {
        Mercury,
        Venus,
        Earth,
        Mars,
    }

    impl Planet {
        pub fn get_name(&self) -> String { format!("{:?}", self) }

        pub fn get_initial(&self) -> char {
            match self {
                Planet::Mercury | Planet::Mars => 'M',
                Planet::Venus => 'V',
                Planet::Earth => 'E',
            }
        }

        pub fn get_moons(&self) -> u8 {
            match self {
                Planet::Mercury | Planet::Venus => 0,
                Planet::Earth => 1,
                Planet::Mars => 2,
            }
        }

        pub fn get_self(&self) -> Self { *self }

        pub fn is_rocky(&self) -> bool { true }

        pub fn get_scaled(&self, factor: u8) -> u8 { self.get_moons() * factor }
    }

    include!(concat!(env!("OUT_DIR"), "/model/solar/planet_repository.rs"));
}
