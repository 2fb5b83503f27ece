//! Benchmark the gap walk over a realistically packed week.

use std::collections::BTreeSet;
use std::hint::black_box;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::slots::find_available_slots;
use slot_engine::types::{BusyPeriod, Practitioner, Service, Shift};

fn ts(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

fn fixture() -> (Service, Practitioner, Vec<NaiveDate>, Vec<BusyPeriod>, Vec<Shift>) {
    let service = Service {
        id: "svc".to_string(),
        name: "Consultation".to_string(),
        duration_minutes: 30,
        required_capabilities: BTreeSet::new(),
        preferred_capabilities: BTreeSet::new(),
        required_equipment: BTreeSet::new(),
        tags: BTreeSet::new(),
        assigned_practitioners: vec![],
    };
    let practitioner = Practitioner {
        id: "p1".to_string(),
        certifications: BTreeSet::new(),
        specialties: BTreeSet::new(),
    };

    // A 7-day week, one 08:00-18:00 shift per day, eight appointments each.
    let mut dates = Vec::new();
    let mut appointments = Vec::new();
    let mut shifts = Vec::new();
    for day in 16..23 {
        dates.push(NaiveDate::from_ymd_opt(2026, 3, day).unwrap());
        shifts.push(Shift {
            practitioner_id: "p1".to_string(),
            start: ts(day, 8, 0),
            end: ts(day, 18, 0),
            available_equipment: BTreeSet::new(),
            tags: BTreeSet::new(),
        });
        for hour in 8..16 {
            appointments.push(BusyPeriod {
                practitioner_id: "p1".to_string(),
                start: ts(day, hour, 0),
                end: Some(ts(day, hour, 45)),
                duration_minutes: None,
            });
        }
    }

    (service, practitioner, dates, appointments, shifts)
}

fn bench_slot_walk(c: &mut Criterion) {
    let (service, practitioner, dates, appointments, shifts) = fixture();

    c.bench_function("find_available_slots/packed_week", |b| {
        b.iter(|| {
            find_available_slots(
                black_box(&service),
                black_box(&practitioner),
                black_box(&dates),
                black_box(&appointments),
                &[],
                black_box(&shifts),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_slot_walk);
criterion_main!(benches);
