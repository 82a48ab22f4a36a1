use criterion::{BatchSize, Criterion, Throughput};
use ethernet_manager::network::readline::{Monotonic, read_line};
use ethernet_manager::network::{Close, Read};
use std::hint::black_box;
use std::time::{Duration, Instant};

struct SliceSocket {
    data: Vec<u8>,
    pos: usize,
}

impl Read for SliceSocket {
    type Error = ();
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Close for SliceSocket {
    type Error = ();
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct StdClock(Instant);

impl Monotonic for StdClock {
    fn now_ms(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

pub fn bench_read_line(c: &mut Criterion) {
    let mut line = vec![b'a'; 254];
    line.extend_from_slice(b"\r\n");
    let clock = StdClock(Instant::now());

    let mut group = c.benchmark_group("readline");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("256_byte_line", |b| {
        b.iter_batched(
            || SliceSocket {
                data: line.clone(),
                pos: 0,
            },
            |mut sock| {
                let parsed: heapless::Vec<u8, 256> =
                    read_line(&mut sock, &clock, Duration::from_secs(1)).unwrap();
                black_box(parsed)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
