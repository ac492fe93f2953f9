//! Генераторы случайных данных для демонстрационных таблиц.
//!
//! Каждая функция имеет вариант `*_with`, принимающий генератор явно
//! (для тестов используется `StdRng::seed_from_u64`).

use chrono::{Duration, NaiveDate};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use super::date_utils::{format_ymd, parse_iso_date};

/// Возвращается, если одна из границ не является корректной датой
pub const FALLBACK_DATE: &str = "2024-01-01";

const CITIES: [&str; 6] = [
    "Москва",
    "Санкт-Петербург",
    "Казань",
    "Новосибирск",
    "Екатеринбург",
    "Самара",
];
const STREETS: [&str; 6] = [
    "ул. Ленина",
    "ул. Садовая",
    "пр. Мира",
    "ул. Школьная",
    "Кольцевая ул.",
    "Технопарковая ул.",
];
const BUILDING_NUMBERS: [&str; 5] = ["д. 1", "д. 2", "д. 3", "д. 4", "д. 5"];

/// Случайная дата между `start` и `end` (строки "YYYY-MM-DD") в формате "YYYY-MM-DD"
pub fn random_date(start: &str, end: &str) -> String {
    random_date_with(&mut rand::thread_rng(), start, end)
}

pub fn random_date_with<R: Rng + ?Sized>(rng: &mut R, start: &str, end: &str) -> String {
    let (Some(start), Some(end)) = (parse_iso_date(start), parse_iso_date(end)) else {
        return FALLBACK_DATE.to_string();
    };
    format_ymd(random_date_between(rng, start, end))
}

/// Равномерно выбранная дата из отрезка; границы меняются местами, если start > end
pub fn random_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let span = (end - start).num_days();
    start + Duration::days(rng.gen_range(0..=span))
}

/// Случайная сумма в диапазоне [min, max] с двумя знаками после запятой
pub fn random_amount(min: f64, max: f64) -> String {
    random_amount_with(&mut rand::thread_rng(), min, max)
}

pub fn random_amount_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.gen::<f64>() * (max - min) + min;
    format!("{:.2}", value)
}

/// Префикс + `length` случайных символов из [A-Za-z0-9]
pub fn random_string(prefix: &str, length: usize) -> String {
    random_string_with(&mut rand::thread_rng(), prefix, length)
}

pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, prefix: &str, length: usize) -> String {
    let mut result = String::with_capacity(prefix.len() + length);
    result.push_str(prefix);
    result.extend((0..length).map(|_| char::from(rng.sample(Alphanumeric))));
    result
}

/// Случайный адрес: "город улица дом"
pub fn random_address() -> String {
    random_address_with(&mut rand::thread_rng())
}

pub fn random_address_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let city = CITIES.choose(rng).copied().unwrap_or_default();
    let street = STREETS.choose(rng).copied().unwrap_or_default();
    let building = BUILDING_NUMBERS.choose(rng).copied().unwrap_or_default();
    format!("{} {} {}", city, street, building)
}

/// Элемент по индексу или `default`, если индекс за пределами среза
pub fn safe_access<T: Clone>(items: &[T], index: usize, default: T) -> T {
    items.get(index).cloned().unwrap_or(default)
}
