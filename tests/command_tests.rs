use gas_tally::commands::{display_depth_from_flag, execute_tally, validate_args, TallyArgs};
use gas_tally::parser::DocumentShape;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_trace(doc: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(doc.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn cron_trace() -> serde_json::Value {
    json!({
        "value": { "active": { "ExecutionTrace": {
            "Msg": { "From": "f00", "To": "f03", "Method": 2 },
            "GasCharges": [{ "tg": 1500.5 }, { "tg": 499.7 }],
            "Subcalls": [
                {
                    "Msg": { "From": "f03", "To": "f04", "Method": 5 },
                    "GasCharges": [{ "tg": 1000 }],
                    "Subcalls": [{
                        "Msg": { "From": "f04", "To": "f05", "Method": 4 },
                        "GasCharges": [{ "tg": 250 }],
                        "Subcalls": null
                    }]
                },
                {
                    "Msg": { "From": "f03", "To": "f06", "Method": 7 },
                    "GasCharges": []
                }
            ]
        } } }
    })
}

fn run(args: &TallyArgs) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute_tally(args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_single_root_report() {
    let file = write_trace(&cron_trace());
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        shape: DocumentShape::SingleRoot,
        display_depth: None,
    };

    let text = run(&args).unwrap();

    let expected = [
        "f00->f03:2 self:2,000 total:3,250",
        "  f03->f04:5 self:1,000 total:1,250",
        "    f04->f05:4 self:250 total:250",
        "  f03->f06:7 self:0 total:0",
        "Total gas: 3,250",
        "",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn test_single_root_depth_limit() {
    let file = write_trace(&cron_trace());
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        shape: DocumentShape::SingleRoot,
        display_depth: Some(2),
    };

    let text = run(&args).unwrap();

    let expected = [
        "f00->f03:2 self:2,000 total:3,250",
        "  f03->f04:5 self:1,000 total:1,250",
        "  f03->f06:7 self:0 total:0",
        "Total gas: 3,250",
        "",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn test_negative_depth_prints_only_total() {
    let file = write_trace(&cron_trace());
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        shape: DocumentShape::SingleRoot,
        display_depth: display_depth_from_flag(Some(-1)),
    };

    let text = run(&args).unwrap();

    assert_eq!(text, "Total gas: 3,250\n");
}

#[test]
fn test_messages_report() {
    let doc = json!({
        "Trace": [
            {
                "MsgCid": { "/": "bafy2bzaceaone" },
                "ExecutionTrace": {
                    "Msg": { "From": "f1abc", "To": "f01234", "Method": 3844450837u64 },
                    "GasCharges": [{ "tg": 123456 }],
                    "Subcalls": [{
                        "Msg": { "From": "f01234", "To": "f05", "Method": 2 },
                        "GasCharges": [{ "tg": 1000 }]
                    }]
                }
            },
            {
                "MsgCid": { "/": "bafy2bzaceatwo" },
                "ExecutionTrace": {
                    "Msg": { "From": "f1def", "To": "f02", "Method": 0 },
                    "GasCharges": [{ "tg": 7 }]
                }
            }
        ]
    });
    let file = write_trace(&doc);
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        shape: DocumentShape::Messages,
        display_depth: None,
    };

    let text = run(&args).unwrap();

    let expected = [
        "call\tself\ttotal",
        "bafy2bzaceaone",
        "f1abc→f01234:3844450837\t     123,456\t     124,456",
        "  f01234→f05:2\t       1,000\t       1,000",
        "bafy2bzaceatwo",
        "f1def→f02:0\t           7\t           7",
        "",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn test_missing_from_aborts_without_output() {
    let doc = json!({
        "value": { "active": { "ExecutionTrace": {
            "Msg": { "To": "f03", "Method": 2 },
            "GasCharges": [{ "tg": 10 }]
        } } }
    });
    let file = write_trace(&doc);
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        shape: DocumentShape::SingleRoot,
        display_depth: None,
    };
    let mut out = Vec::new();

    let result = execute_tally(&args, &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_validate_args() {
    let file = write_trace(&cron_trace());
    let args = TallyArgs {
        trace_path: file.path().to_path_buf(),
        ..Default::default()
    };
    assert!(validate_args(&args).is_ok());

    assert!(validate_args(&TallyArgs::default()).is_err());
}
