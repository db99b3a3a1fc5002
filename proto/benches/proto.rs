use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proto::{
    encode_packet, encode_raw_packet, HandshakeC2s, HandshakeNextState, LoginDisconnectS2c,
    PacketDecoder, PacketState, ServerboundPacket, StatusPingC2s, StatusPongS2c, StatusRequestC2s,
    StatusResponseS2c,
};

const STATUS_JSON: &str = concat!(
    r#"{"version":{"name":"1.19.4","protocol":762},"#,
    r#""players":{"max":100,"online":0,"sample":[]},"#,
    r#""description":{"text":"Hello, world!"}}"#
);
const KICK_JSON: &str = r#"{"text":"Login is disabled on this server"}"#;

fn sample_handshake() -> HandshakeC2s<'static> {
    HandshakeC2s {
        protocol_version: 762,
        server_address: "play.example.net",
        server_port: 25565,
        next_state: HandshakeNextState::Status,
    }
}

fn serverbound_frames() -> Vec<(PacketState, Vec<u8>)> {
    let mut entries = Vec::new();

    let mut bytes = Vec::new();
    encode_packet(&mut bytes, &sample_handshake()).unwrap();
    entries.push((PacketState::Handshaking, bytes));

    let mut bytes = Vec::new();
    encode_packet(&mut bytes, &StatusRequestC2s).unwrap();
    entries.push((PacketState::Status, bytes));

    let mut bytes = Vec::new();
    encode_packet(&mut bytes, &StatusPingC2s { payload: 0x1234_5678 }).unwrap();
    entries.push((PacketState::Status, bytes));

    entries
}

fn hostile_frames() -> Vec<(PacketState, Vec<u8>)> {
    let mut entries = Vec::new();

    // Unknown ID in the status namespace.
    let mut bytes = Vec::new();
    encode_raw_packet(&mut bytes, 99, &[0x01, 0x02, 0x03]).unwrap();
    entries.push((PacketState::Status, bytes));

    // Ping body shorter than its payload.
    let mut bytes = Vec::new();
    encode_raw_packet(&mut bytes, 0x01, &[0u8; 4]).unwrap();
    entries.push((PacketState::Status, bytes));

    // Status request with trailing bytes.
    let mut bytes = Vec::new();
    encode_raw_packet(&mut bytes, 0x00, &[0x00]).unwrap();
    entries.push((PacketState::Status, bytes));

    entries
}

fn bench_encode_round_robin(c: &mut Criterion) {
    let handshake = sample_handshake();
    c.bench_function("encode_round_robin", |b| {
        let mut out = Vec::with_capacity(1024);
        b.iter(|| {
            out.clear();
            encode_packet(&mut out, black_box(&handshake)).unwrap();
            encode_packet(&mut out, &StatusRequestC2s).unwrap();
            encode_packet(&mut out, &StatusPingC2s { payload: 42 }).unwrap();
            encode_packet(&mut out, &StatusResponseS2c { json: STATUS_JSON }).unwrap();
            encode_packet(&mut out, &StatusPongS2c { payload: 42 }).unwrap();
            encode_packet(&mut out, &LoginDisconnectS2c { reason: KICK_JSON }).unwrap();
            black_box(out.len());
        })
    });
}

fn bench_decode_round_robin(c: &mut Criterion) {
    let entries = serverbound_frames();
    c.bench_function("decode_round_robin", |b| {
        let mut dec = PacketDecoder::new();
        b.iter(|| {
            for (state, bytes) in &entries {
                dec.queue_slice(bytes);
                let frame = dec.try_next_packet().unwrap().unwrap();
                match frame.decode_serverbound(*state).unwrap() {
                    ServerboundPacket::Handshake(packet) => {
                        black_box(packet.protocol_version);
                    }
                    ServerboundPacket::StatusRequest(_) => {}
                    ServerboundPacket::StatusPing(packet) => {
                        black_box(packet.payload);
                    }
                }
            }
        })
    });
}

fn bench_decode_rejects_garbage(c: &mut Criterion) {
    let entries = hostile_frames();
    c.bench_function("decode_rejects_garbage", |b| {
        let mut dec = PacketDecoder::new();
        b.iter(|| {
            for (state, bytes) in &entries {
                dec.queue_slice(bytes);
                let frame = dec.try_next_packet().unwrap().unwrap();
                black_box(frame.decode_serverbound(*state).is_err());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_encode_round_robin,
    bench_decode_round_robin,
    bench_decode_rejects_garbage
);
criterion_main!(benches);
