//! Lock-free ring buffer between the audio callback and the caller's thread

use ringbuf::{HeapConsumer, HeapProducer, HeapRb};

/// Single-producer single-consumer audio ring buffer
pub struct AudioRingBuffer {
    producer: HeapProducer<f64>,
    consumer: HeapConsumer<f64>,
    capacity: usize,
}

impl AudioRingBuffer {
    /// Create a ring buffer holding up to `capacity` samples
    pub fn new(capacity: usize) -> Self {
        let rb = HeapRb::<f64>::new(capacity);
        let (producer, consumer) = rb.split();

        Self {
            producer,
            consumer,
            capacity,
        }
    }

    /// Split into the producer and consumer ends
    pub fn split(self) -> (AudioProducer, AudioConsumer) {
        (
            AudioProducer {
                producer: self.producer,
            },
            AudioConsumer {
                consumer: self.consumer,
            },
        )
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Writing end, owned by the audio callback
pub struct AudioProducer {
    producer: HeapProducer<f64>,
}

impl AudioProducer {
    /// Write samples; returns how many fit (the rest are dropped)
    pub fn write(&mut self, samples: &[f64]) -> usize {
        self.producer.push_slice(samples)
    }

    pub fn free_len(&self) -> usize {
        self.producer.free_len()
    }
}

/// Reading end, owned by the caller
pub struct AudioConsumer {
    consumer: HeapConsumer<f64>,
}

impl AudioConsumer {
    /// Read up to `buffer.len()` samples; returns how many were available
    pub fn read(&mut self, buffer: &mut [f64]) -> usize {
        self.consumer.pop_slice(buffer)
    }

    pub fn len(&self) -> usize {
        self.consumer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }
}
