use std::fs;
use std::path::PathBuf;

use argot_common::args::ArgumentMap;
use argot_core::service::{ServiceResolver, ServiceValue};
use argot_core::{Error, Reason};
use argot_protocols::ServicesDb;

const SERVICES: &str = "\
# test services
ftp             21/tcp
ssh             22/tcp
http            80/tcp          www www-http
postgresql      5432/tcp        postgres
";

fn write_services(file_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("argot-{}-{file_name}", std::process::id()));
    fs::write(&path, SERVICES).expect("write services fixture");
    path
}

#[test]
fn resolves_against_services_file() {
    let path = write_services("services");
    let db = ServicesDb::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    let resolver = ServiceResolver::new(db);
    let args: ArgumentMap = [
        ("--web", "80"),
        ("--db", "postgres"),
        ("--dyn", "49152-65535"),
        ("--odd", "7777"),
        ("--padded", "0022"),
    ]
    .into_iter()
    .collect();

    let web = resolver.validate_arg(&args, "--web").unwrap();
    assert_eq!((web.name.as_str(), web.value), ("http", ServiceValue::Port(80)));

    let db = resolver.validate_arg(&args, "--db").unwrap();
    assert_eq!((db.name.as_str(), db.value), ("postgres", ServiceValue::Port(5432)));

    let dynamic = resolver.validate_arg(&args, "--dyn").unwrap();
    assert_eq!(dynamic.name, "r-49152+16383");

    let odd = resolver.validate_arg(&args, "--odd").unwrap();
    assert_eq!(odd.name, "p-7777");

    let padded = resolver.validate_arg(&args, "--padded").unwrap();
    assert_eq!((padded.name.as_str(), padded.value), ("ssh", ServiceValue::Port(22)));
    assert_eq!(padded.raw, "0022");
}

#[test]
fn unknown_service_is_invalid_argument() {
    let resolver = ServiceResolver::new(ServicesDb::parse(SERVICES));
    let err = resolver.validate(Some("gopher"), "--service").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument { reason: Reason::UnknownService, .. }
    ));
}

#[test]
fn empty_database_falls_back_to_synthetic_names() {
    let resolver = ServiceResolver::new(ServicesDb::new());
    assert_eq!(resolver.validate(Some("80"), "--service").unwrap().name, "p-80");
    assert_eq!(resolver.service_name(80), "port-80");
    assert!(matches!(
        resolver.service_port("http"),
        Err(Error::UnresolvedService { .. })
    ));
}

#[test]
fn missing_services_file() {
    let err = ServicesDb::load("/nonexistent/argot-services").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/argot-services"));

    let db = ServicesDb::load_or_empty("/nonexistent/argot-services");
    assert!(db.is_empty());
    let resolver = ServiceResolver::new(&db);
    assert_eq!(resolver.validate(Some("22"), "--service").unwrap().name, "p-22");
}
