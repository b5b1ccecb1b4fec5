/// Vertex ceiling of one batch; reaching it flushes automatically.
pub const MAX_VERTICES: usize = 100_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Primitive {
    /// Every four consecutive vertices form one quad.
    Quads,
}

/// Borrowed view of the emitter's buffers at flush time.
///
/// `positions` holds 3 floats per vertex, `tex_coords` 2 and `colors` 3;
/// attributes that were never set in the batch are `None`.
#[derive(Copy, Clone, Debug)]
pub struct Batch<'a> {
    pub positions: &'a [f32],
    pub tex_coords: Option<&'a [f32]>,
    pub colors: Option<&'a [f32]>,
    pub vertex_count: usize,
    pub primitive: Primitive,
}

/// Receiver of finished batches (the draw call side).
pub trait BatchSink {
    fn submit(&mut self, batch: &Batch<'_>);
}

impl<F: FnMut(&Batch<'_>)> BatchSink for F {
    fn submit(&mut self, batch: &Batch<'_>) {
        self(batch)
    }
}

/// Immediate-style vertex builder backed by reusable buffers.
///
/// Texture coordinate and colour are sticky: once set they are attached to
/// every following vertex until the batch ends.
pub struct Tesselator<S: BatchSink> {
    positions: Vec<f32>,
    tex_coords: Vec<f32>,
    colors: Vec<f32>,
    vertices: usize,
    capacity: usize,
    uv: [f32; 2],
    rgb: [f32; 3],
    has_texture: bool,
    has_color: bool,
    flushes: u64,
    sink: S,
}

impl<S: BatchSink> Tesselator<S> {
    pub fn new(sink: S) -> Self {
        Self::with_capacity(sink, MAX_VERTICES)
    }

    /// Emitter that flushes every `capacity` vertices (at least one).
    pub fn with_capacity(sink: S, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            positions: Vec::with_capacity(capacity * 3),
            tex_coords: Vec::with_capacity(capacity * 2),
            colors: Vec::with_capacity(capacity * 3),
            vertices: 0,
            capacity,
            uv: [0.0; 2],
            rgb: [0.0; 3],
            has_texture: false,
            has_color: false,
            flushes: 0,
            sink,
        }
    }

    /// Starts a new batch: drops pending vertices and disables both attributes.
    pub fn begin_batch(&mut self) {
        self.clear();
        self.has_texture = false;
        self.has_color = false;
    }

    pub fn tex(&mut self, u: f32, v: f32) {
        if !self.has_texture {
            self.has_texture = true;
            self.tex_coords.resize(self.vertices * 2, 0.0);
        }
        self.uv = [u, v];
    }

    pub fn color(&mut self, r: f32, g: f32, b: f32) {
        if !self.has_color {
            self.has_color = true;
            self.colors.resize(self.vertices * 3, 0.0);
        }
        self.rgb = [r, g, b];
    }

    pub fn vertex(&mut self, x: f32, y: f32, z: f32) {
        self.positions.extend_from_slice(&[x, y, z]);
        if self.has_texture {
            self.tex_coords.extend_from_slice(&self.uv);
        }
        if self.has_color {
            self.colors.extend_from_slice(&self.rgb);
        }
        self.vertices += 1;
        if self.vertices == self.capacity {
            self.flush();
        }
    }

    /// Hands pending vertices to the sink. Attribute flags stay as they are.
    pub fn flush(&mut self) {
        if self.vertices == 0 {
            return;
        }
        let batch = Batch {
            positions: &self.positions,
            tex_coords: self.has_texture.then_some(&self.tex_coords[..]),
            colors: self.has_color.then_some(&self.colors[..]),
            vertex_count: self.vertices,
            primitive: Primitive::Quads,
        };
        self.sink.submit(&batch);
        self.flushes += 1;
        self.clear();
    }

    fn clear(&mut self) {
        self.vertices = 0;
        self.positions.clear();
        self.tex_coords.clear();
        self.colors.clear();
    }

    /// Vertices waiting for the next flush.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Batches submitted since creation.
    #[inline]
    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
