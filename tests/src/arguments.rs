use argot_common::args::ArgumentMap;
use argot_common::config::CommonArgs;
use argot_common::network::{inet_aton, inet_ntoa, mac_aton, mac_ntoa};
use argot_core::multival::expand_multival_arg;
use argot_core::naming::NameSet;
use argot_core::suffix::{validate_interval_arg, validate_size_arg};
use argot_core::validators::{
    Bounds, NetworkArg, Selection, validate_bool_arg, validate_enum_arg, validate_int_arg,
    validate_network_arg,
};
use argot_core::{Error, Reason};

/// Arguments as a command creating two VMs might receive them.
fn create_vm_args() -> ArgumentMap {
    let mut args: ArgumentMap = [
        ("--username", "operator"),
        ("--password", "pw"),
        ("--count", "2"),
        ("--cpus", "4"),
        ("--memory", "2G"),
        ("--disk", "20,40,80"),
        ("--network", "10.0.3.17/24"),
        ("--state", "Started"),
        ("--ttl", "2H"),
        ("--persistent", "yes"),
    ]
    .into_iter()
    .collect();
    args.insert_flag("--debug", false);
    args
}

#[test]
fn create_vm_command_validates_end_to_end() {
    let args = create_vm_args();

    let common = CommonArgs::from_args(&args, |_| None, false).unwrap();
    assert_eq!(common.username, "operator");
    assert!(!common.debug);

    let count = validate_int_arg(&args, "--count", Bounds::new(1, 10)).unwrap();
    let cpus = validate_int_arg(&args, "--cpus", Bounds::new(1, 16)).unwrap();
    let memory = validate_size_arg(&args, "--memory", 'M', Bounds::new(256, 65536)).unwrap();
    let disks = expand_multival_arg(&args, "--disk", count as usize).unwrap();
    let ttl = validate_interval_arg(&args, "--ttl", 'M', Bounds::none()).unwrap();
    let state = validate_enum_arg(&args, "--state", &["started", "stopped"], true).unwrap();
    let persistent = validate_bool_arg(&args, "--persistent").unwrap();
    let debug = validate_bool_arg(&args, "--debug").unwrap();

    assert_eq!((count, cpus), (2, 4));
    assert_eq!(memory, Some(2u64 << 30));
    assert_eq!(disks, ["20", "40"]);
    assert_eq!(ttl, Some(7200));
    assert_eq!(state, Some(Selection::Choice("started".into())));
    assert!(persistent);
    assert!(!debug);

    let Some(NetworkArg::Static(net)) = validate_network_arg(&args, "--network").unwrap() else {
        panic!("expected a static network");
    };
    assert_eq!(net.to_dotted(), ("10.0.3.0".into(), "255.255.255.0".into()));
}

#[test]
fn disk_sizes_expand_then_validate() {
    let args: ArgumentMap = [("--disk", "20,40")].into_iter().collect();
    let disks = expand_multival_arg(&args, "--disk", 3).unwrap();

    let sizes: Vec<u64> = disks
        .iter()
        .map(|d| argot_core::suffix::validate_size(Some(d.as_str()), "--disk", 'G', Bounds::none()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();

    assert_eq!(sizes, [20u64 << 30, 40 << 30, 40 << 30]);
}

#[test]
fn first_failure_aborts() {
    let args: ArgumentMap = [("--cpus", "64"), ("--memory", "12X")].into_iter().collect();

    let err = validate_int_arg(&args, "--cpus", Bounds::new(1, 16)).unwrap_err();
    assert!(matches!(
        &err,
        Error::InvalidArgument { name, value, reason: Reason::AboveMaximum(_) }
            if name == "--cpus" && value == "64"
    ));

    let err = validate_size_arg(&args, "--memory", 'M', Bounds::none()).unwrap_err();
    assert_eq!(err.to_string(), "illegal suffix 'X' for --memory: 12X");
}

#[test]
fn codec_round_trips() {
    for addr in ["10.0.0.1", "0.0.0.0", "255.255.255.255", "192.168.100.7"] {
        assert_eq!(inet_ntoa(inet_aton(addr).unwrap()), addr);
    }
    for mac in ["aa:bb:cc:dd:ee:ff", "00:00:00:00:00:00", "02:42:ac:11:00:02"] {
        assert_eq!(mac_ntoa(mac_aton(mac).unwrap()), mac);
    }
}

#[test]
fn batch_naming_keeps_names_unique() {
    let mut names: NameSet = ["web-0", "web-2", "db-0"].into_iter().collect();

    let batch: Vec<String> = (0..3).map(|_| names.allocate("web")).collect();

    assert_eq!(batch, ["web-1", "web-3", "web-4"]);
    assert_eq!(names.len(), 6);
}
