//! Generators for the mock users and reservations shown by the admin screens.
//!
//! Generation is driven by a caller-supplied RNG so a fixed seed reproduces
//! the same data set.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::record::Record;
use crate::domain::reservation::{PaymentStatus, Reservation, ReservationStatus, Route};
use crate::domain::types::RecordId;
use crate::domain::user::{User, UserStatus};
use crate::source::errors::SourceResult;
use crate::source::memory::InMemorySource;

const NAMES: [&str; 25] = [
    "Maria Silva",
    "João Santos",
    "Ana Costa",
    "Pedro Lima",
    "Sofia Mendes",
    "Carlos Oliveira",
    "Fernanda Rocha",
    "Miguel Torres",
    "Inês Ferreira",
    "Rui Cardoso",
    "Catarina Lopes",
    "António Martins",
    "Teresa Sousa",
    "José Pereira",
    "Marta Alves",
    "Hugo Dias",
    "Rita Gomes",
    "Paulo Ribeiro",
    "Carla Nunes",
    "Diogo Correia",
    "Luísa Monteiro",
    "Bruno Fonseca",
    "Sandra Pinto",
    "Nuno Teixeira",
    "Patrícia Cruz",
];

const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "outlook.com",
    "yahoo.com",
    "hotmail.com",
    "sapo.pt",
];

const ROUTES: [(&str, &str, &str, &str); 7] = [
    ("LIS", "MAD", "Lisboa", "Madrid"),
    ("OPO", "PAR", "Porto", "Paris"),
    ("LIS", "LON", "Lisboa", "Londres"),
    ("FAO", "BCN", "Faro", "Barcelona"),
    ("LIS", "NYC", "Lisboa", "Nova York"),
    ("OPO", "FRA", "Porto", "Frankfurt"),
    ("LIS", "ROM", "Lisboa", "Roma"),
];

const AIRLINES: [&str; 6] = ["TP", "FR", "LH", "AF", "BA", "KL"];

const DAY_SECONDS: i64 = 24 * 60 * 60;

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn seconds_within<R: Rng>(rng: &mut R, days: i64) -> Duration {
    Duration::seconds(rng.random_range(0..days * DAY_SECONDS))
}

fn phone<R: Rng>(rng: &mut R) -> String {
    format!("+351 9{}", rng.random_range(10_000_000..100_000_000))
}

fn strip_accents(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// Lower-cased, dot-separated, accent-free form of a person's name.
fn email_local_part(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '.' } else { strip_accents(c) })
        .collect()
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generates `count` users with ids `1..=count`.
pub fn users<R: Rng>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SourceResult<Vec<User>> {
    let mut users = Vec::with_capacity(count);
    for index in 0..count {
        let name = *pick(rng, &NAMES);
        let email = format!(
            "{}{}@{}",
            email_local_part(name),
            rng.random_range(0..100),
            pick(rng, &EMAIL_DOMAINS)
        );
        let bookings = rng.random_range(0..25_u32);
        let total_spent = i64::from(bookings) * rng.random_range(500..2500_i64);

        users.push(User {
            id: RecordId::new(index as i64 + 1)?,
            name: name.to_string(),
            email,
            status: *pick(rng, &UserStatus::ALL),
            bookings,
            total_spent,
            last_activity: now - seconds_within(rng, 30),
            registration_date: now - seconds_within(rng, 365),
            phone: phone(rng),
            country: if rng.random_bool(0.3) {
                "Brasil".to_string()
            } else {
                "Portugal".to_string()
            },
            avatar: initials(name),
        });
    }
    Ok(users)
}

/// Generates `count` reservations, newest booking first.
pub fn reservations<R: Rng>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SourceResult<Vec<Reservation>> {
    let mut reservations = Vec::with_capacity(count);
    for index in 0..count {
        let passenger = *pick(rng, &NAMES[..15]);
        let (from, to, from_name, to_name) = *pick(rng, &ROUTES);
        let airline = *pick(rng, &AIRLINES);

        let booking_date = now - seconds_within(rng, 90);
        let departure_date = booking_date + seconds_within(rng, 120);
        let flight_minutes = rng.random_range(2 * 60..14 * 60);
        let total_amount = rng.random_range(200..1700_i64);

        let seat_preference = if rng.random_bool(0.3) {
            "Window"
        } else if rng.random_bool(0.5) {
            "Aisle"
        } else {
            "Any"
        };

        reservations.push(Reservation {
            id: RecordId::new(index as i64 + 1)?,
            booking_code: format!("MND{}", 1000 + index),
            passenger: passenger.to_string(),
            email: format!("{}@email.com", email_local_part(passenger)),
            phone: phone(rng),
            route: Route {
                from: from.to_string(),
                to: to.to_string(),
                from_name: from_name.to_string(),
                to_name: to_name.to_string(),
            },
            flight_number: format!("{airline}{}", rng.random_range(1000..10000)),
            airline: airline.to_string(),
            departure_date,
            arrival_date: departure_date + Duration::minutes(flight_minutes),
            booking_date,
            status: *pick(rng, &ReservationStatus::ALL),
            payment_status: *pick(rng, &PaymentStatus::ALL),
            total_amount,
            taxes: total_amount * 15 / 100,
            passengers: rng.random_range(1..=4),
            baggage: rng.random_bool(0.5),
            seat_preference: seat_preference.to_string(),
            special_requests: rng
                .random_bool(0.2)
                .then(|| "Vegetarian meal".to_string()),
            checkin_completed: rng.random_bool(0.4),
            last_update: now - seconds_within(rng, 7),
        });
    }

    reservations.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
    Ok(reservations)
}

/// In-memory source of `count` generated users.
pub fn users_source(
    count: usize,
    seed: Option<u64>,
    now: DateTime<Utc>,
) -> SourceResult<InMemorySource> {
    let mut rng = rng_from_seed(seed);
    let records = users(count, &mut rng, now)?
        .iter()
        .map(Record::from)
        .collect();
    Ok(InMemorySource::new(records))
}

/// In-memory source of `count` generated reservations.
pub fn reservations_source(
    count: usize,
    seed: Option<u64>,
    now: DateTime<Utc>,
) -> SourceResult<InMemorySource> {
    let mut rng = rng_from_seed(seed);
    let records = reservations(count, &mut rng, now)?
        .iter()
        .map(Record::from)
        .collect();
    Ok(InMemorySource::new(records))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn email_local_part_drops_accents() {
        assert_eq!(email_local_part("João Santos"), "joao.santos");
        assert_eq!(email_local_part("Inês Ferreira"), "ines.ferreira");
        assert_eq!(initials("Patrícia Cruz"), "PC");
    }

    #[test]
    fn same_seed_same_users() {
        let first = users(20, &mut rng_from_seed(Some(7)), now()).unwrap();
        let second = users(20, &mut rng_from_seed(Some(7)), now()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn users_have_sequential_ids_and_bounded_dates() {
        let users = users(150, &mut rng_from_seed(Some(1)), now()).unwrap();

        assert_eq!(users.len(), 150);
        assert_eq!(users[0].id.get(), 1);
        assert_eq!(users[149].id.get(), 150);
        for user in &users {
            assert!(user.last_activity <= now());
            assert!(user.last_activity > now() - Duration::days(30));
            assert!(user.bookings < 25);
            assert!(user.email.contains('@'));
        }
    }

    #[test]
    fn reservations_are_newest_first_with_unique_codes() {
        let reservations = reservations(200, &mut rng_from_seed(Some(3)), now()).unwrap();

        assert_eq!(reservations.len(), 200);
        assert!(
            reservations
                .windows(2)
                .all(|pair| pair[0].booking_date >= pair[1].booking_date)
        );
        let codes: HashSet<_> = reservations.iter().map(|r| &r.booking_code).collect();
        assert_eq!(codes.len(), 200);
        for reservation in &reservations {
            assert!(reservation.departure_date >= reservation.booking_date);
            assert!(reservation.arrival_date > reservation.departure_date);
            assert!((1..=4).contains(&reservation.passengers));
        }
    }
}
