use bikeshare::calendar::{DayOfWeek, Month};
use bikeshare::stats::BirthYearStats;
use bikeshare::units::{Unit, UnitConvertible};
use bikeshare::{City, CityRegistry, Config, Dataset, FilterSelection, TripStatistics};

fn load_mock(city: City) -> Dataset {
    let registry = CityRegistry::new(&Config::default().with_data_dir("mock")).unwrap();
    Dataset::load(&registry, city).unwrap()
}

#[test]
fn two_trip_scenario() {
    let raw = "Start Time,Start Station,End Station,Trip Duration,User Type\n\
               2017-01-01 08:00:00,A,B,300,Subscriber\n\
               2017-01-01 09:00:00,A,C,600,Customer\n";
    let dataset = Dataset::from_reader(City::Chicago, raw.as_bytes()).unwrap();
    let stats = TripStatistics::compute(&FilterSelection::none().apply(&dataset));

    assert_eq!(stats.time.popular_month, Some(Month::January));
    assert!(stats.time.to_string().starts_with("Most popular month is January"));
    assert_eq!(stats.station.popular_start_station.as_deref(), Some("A"));
    assert_eq!(stats.duration.total.value, Some(900.0));
    assert_eq!(stats.duration.mean.value, Some(450.0));

    let mut user_types = stats.user.user_types.clone();
    user_types.sort();
    assert_eq!(
        user_types,
        vec![("Customer".to_string(), 1), ("Subscriber".to_string(), 1)]
    );
}

#[test]
fn chicago_full_report() {
    let stats = TripStatistics::compute(&load_mock(City::Chicago));

    assert_eq!(stats.time.popular_month, Some(Month::January));
    assert_eq!(stats.time.popular_day, Some(DayOfWeek::Sunday));
    assert_eq!(stats.time.popular_hour, Some(8));

    assert_eq!(stats.station.popular_start_station.as_deref(), Some("Clark St"));
    assert_eq!(stats.station.popular_end_station.as_deref(), Some("Canal St"));
    // Two routes tie at two trips each; the alphabetically first one is reported
    assert_eq!(stats.station.popular_route.as_deref(), Some("Canal St -> Clark St"));

    assert_eq!(stats.duration.total.value, Some(3600.0));
    assert_eq!(stats.duration.mean.value, Some(720.0));

    assert_eq!(
        stats.user.user_types,
        vec![("Subscriber".to_string(), 4), ("Customer".to_string(), 2)]
    );
    assert_eq!(
        stats.user.genders,
        Some(vec![("Male".to_string(), 3), ("Female".to_string(), 2)])
    );
    assert_eq!(
        stats.user.birth_years,
        Some(BirthYearStats {
            earliest: 1970,
            most_recent: 2000,
            most_common: 1985
        })
    );
}

#[test]
fn washington_reports_demographics_as_not_available() {
    let stats = TripStatistics::compute(&load_mock(City::Washington));

    assert_eq!(stats.time.popular_month, Some(Month::April));
    assert_eq!(stats.time.popular_day, Some(DayOfWeek::Sunday));
    assert_eq!(stats.station.popular_start_station.as_deref(), Some("Lincoln Memorial"));
    assert_eq!(stats.duration.total.value, Some(2550.5));

    assert!(stats.user.genders.is_none());
    assert!(stats.user.birth_years.is_none());

    let report = stats.to_string();
    assert!(report.contains("Gender statistics not available"));
    assert!(report.contains("Birth Year statistics not available"));
    assert!(report.contains("Registered: 3"));
}

#[test]
fn empty_selection_reports_not_available() {
    let dataset = load_mock(City::Chicago);
    let filtered = FilterSelection::month(Month::April).apply(&dataset);
    assert!(filtered.is_empty());

    let stats = TripStatistics::compute(&filtered);
    assert!(stats.time.popular_month.is_none());
    assert!(stats.time.popular_day.is_none());
    assert!(stats.time.popular_hour.is_none());
    assert!(stats.station.popular_start_station.is_none());
    assert!(stats.station.popular_route.is_none());
    assert_eq!(stats.duration.total.value, Some(0.0));
    assert!(stats.duration.mean.value.is_none());
    assert!(stats.user.user_types.is_empty());
    assert!(stats.user.genders.is_none());
    assert!(stats.user.birth_years.is_none());

    let report = stats.to_string();
    assert!(report.contains("Most popular month is not available"));
    assert!(report.contains("Total travel time is 0 seconds"));
    assert!(report.contains("Average travel time is not available"));
}

#[test]
fn single_month_selection() {
    let dataset = load_mock(City::Chicago);
    let stats = TripStatistics::compute(&FilterSelection::month(Month::June).apply(&dataset));

    assert_eq!(stats.time.popular_month, Some(Month::June));
    assert_eq!(stats.time.to_string().lines().last(), Some("Most popular hour is 8 AM"));
    // The only June trip has no duration recorded
    assert_eq!(stats.duration.total.value, Some(0.0));
    assert!(stats.duration.mean.value.is_none());
}

#[test]
fn durations_in_hours() {
    let mut stats = TripStatistics::compute(&load_mock(City::Chicago));
    stats.duration.to_units(&Unit::Hours);

    assert_eq!(stats.duration.total.unit, Unit::Hours);
    assert_eq!(stats.duration.total.value, Some(1.0));
    assert!(stats.to_string().contains("Total travel time is 1 hours"));
}
