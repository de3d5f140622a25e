//! Benchmark for testing decode functionality performance.

use alloy::primitives::{Address, B256, U256};
use alloy_dyn_abi::DynSolValue;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexeth_decoder::{InterfaceDescriptor, Registry};

const TOKEN_ABI: &str = r#"[
    {
        "type": "function",
        "name": "transfer",
        "inputs": [{"name": "to", "type": "address"}, {"name": "amount", "type": "uint256"}],
        "outputs": [{"name": "", "type": "bool"}],
        "stateMutability": "nonpayable"
    },
    {
        "type": "function",
        "name": "batch",
        "inputs": [
            {"name": "recipients", "type": "address[]"},
            {"name": "amounts", "type": "uint256[]"},
            {"name": "memo", "type": "string"}
        ],
        "outputs": [],
        "stateMutability": "nonpayable"
    },
    {
        "type": "event",
        "name": "Transfer",
        "inputs": [
            {"name": "from", "type": "address", "indexed": true},
            {"name": "to", "type": "address", "indexed": true},
            {"name": "value", "type": "uint256", "indexed": false}
        ],
        "anonymous": false
    }
]"#;

fn registry() -> Registry {
    // padding descriptors force the resolver to search past unrelated contracts
    let padding = (0..16).map(|i| {
        InterfaceDescriptor::from_json(
            format!("Padding{i}"),
            &format!(
                r#"[{{"type":"function","name":"noop{i}","inputs":[],"outputs":[],"stateMutability":"view"}}]"#
            ),
        )
        .expect("valid abi")
    });
    let token = InterfaceDescriptor::from_json("Token", TOKEN_ABI).expect("valid abi");

    Registry::from_descriptors(padding.chain(std::iter::once(token)))
}

fn calldata(name: &str, values: Vec<DynSolValue>, registry: &Registry) -> Vec<u8> {
    let function = registry
        .get("Token")
        .and_then(|d| d.methods().iter().find(|f| f.name == name))
        .expect("method exists");

    let mut data = function.selector().to_vec();
    data.extend(DynSolValue::Tuple(values).abi_encode_params());
    data
}

fn test_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexeth_decoder");
    let registry = registry();

    let inputs = [
        (
            "simple",
            calldata(
                "transfer",
                vec![
                    DynSolValue::Address(Address::repeat_byte(0x01)),
                    DynSolValue::Uint(U256::from(1000u64), 256),
                ],
                &registry,
            ),
        ),
        (
            "complex",
            calldata(
                "batch",
                vec![
                    DynSolValue::Array(
                        (0..64u8).map(|i| DynSolValue::Address(Address::repeat_byte(i))).collect(),
                    ),
                    DynSolValue::Array(
                        (0..64u64).map(|i| DynSolValue::Uint(U256::from(i), 256)).collect(),
                    ),
                    DynSolValue::String("payroll".repeat(16)),
                ],
                &registry,
            ),
        ),
    ];

    for (name, data) in inputs.iter() {
        group.sample_size(500);
        group.bench_with_input(BenchmarkId::from_parameter(name), data, |b, data| {
            b.iter(|| registry.decode_transaction(black_box(data)));
        });
    }

    let topics = [
        "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
            .parse::<B256>()
            .expect("valid topic"),
        Address::repeat_byte(0xaa).into_word(),
        Address::repeat_byte(0xbb).into_word(),
    ];
    let data = DynSolValue::Uint(U256::from(500u64), 256).abi_encode();
    group.bench_function(BenchmarkId::from_parameter("event"), |b| {
        b.iter(|| registry.decode_log(black_box(&topics), black_box(&data)));
    });

    group.finish();
}

criterion_group!(benches, test_decode);
criterion_main!(benches);
