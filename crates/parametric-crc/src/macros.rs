//! Internal macro instantiating the parametric CRC engine for one width.
//!
//! The four width modules ([`crc8`](crate::crc8), [`crc16`](crate::crc16),
//! [`crc32`](crate::crc32), [`crc64`](crate::crc64)) share identical
//! structure but different register types; this macro generates the model
//! parameters, the bit-by-bit kernel, the table generators, and the five
//! calculation strategies for a given `(type, width)` pair.
//!
//! # Arguments
//!
//! - `$t`: the register type (`u8` .. `u64`)
//! - `$width`: the register width in bits
//! - `$reflect`: the width-matched bit-reversal function

/// Instantiate the full engine for one CRC width.
macro_rules! crc_width_impl {
  ($t:ty, $width:expr, $reflect:path) => {
    /// CRC model parameters following the Rocksoft / CRC RevEng conventions.
    ///
    /// `poly` and `init` are always recorded in their unreflected (catalog)
    /// form, regardless of the reflection flags.
    ///
    /// # Reflection
    ///
    /// A model carries three reflection flags:
    ///
    /// - `ref_in`: input bytes are fed least-significant-bit first.
    /// - `ref_out`: the result bits are reversed relative to the register at
    ///   finalization.
    /// - `ref_reg`: the *internal* shift register (and lookup tables) run in
    ///   reflected form. Any model produces the same output for either value
    ///   of `ref_reg`; the two settings only trade table layout against a
    ///   per-byte bit reversal of the input when `ref_in != ref_reg`.
    ///
    /// [`new`](Params::new) defaults both `ref_out` and `ref_reg` to
    /// `ref_in`, which is the layout every catalog entry uses.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Params {
      /// Generator polynomial, unreflected form.
      pub poly: $t,
      /// Initial register value, unreflected form.
      pub init: $t,
      /// Value XORed into the result at finalization.
      pub xor_out: $t,
      /// Reflect input bytes.
      pub ref_in: bool,
      /// Reflect the result relative to the register.
      pub ref_out: bool,
      /// Run the shift register (and tables) in reflected form.
      pub ref_reg: bool,
    }

    impl Params {
      /// Define a model; `ref_out` and `ref_reg` default to `ref_in`.
      #[must_use]
      pub const fn new(poly: $t, init: $t, xor_out: $t, ref_in: bool) -> Self {
        Self {
          poly,
          init,
          xor_out,
          ref_in,
          ref_out: ref_in,
          ref_reg: ref_in,
        }
      }

      /// Override the output reflection flag.
      #[must_use]
      pub const fn with_ref_out(mut self, ref_out: bool) -> Self {
        self.ref_out = ref_out;
        self
      }

      /// Override the register convention.
      ///
      /// Models sharing `(width, poly, ref_reg)` use bit-identical lookup
      /// tables, whatever their `ref_in`/`ref_out`.
      #[must_use]
      pub const fn with_ref_reg(mut self, ref_reg: bool) -> Self {
        self.ref_reg = ref_reg;
        self
      }

      /// The polynomial in the register convention.
      #[must_use]
      pub const fn actual_poly(&self) -> $t {
        if self.ref_reg { $reflect(self.poly) } else { self.poly }
      }

      /// The initial register value in the register convention.
      #[must_use]
      pub const fn actual_init(&self) -> $t {
        if self.ref_reg { $reflect(self.init) } else { self.init }
      }

      /// The residue constant of this model.
      ///
      /// This is the register content left by any error-free codeword,
      /// observed through the output convention but before the final XOR.
      /// Derived per the CRC RevEng catalog: initialize the register with
      /// `xor_out` (reflected into the register convention if needed), feed
      /// exactly `width` zero bits, then reflect once more if the input
      /// convention differs from the register convention.
      #[must_use]
      pub const fn residue(&self) -> $t {
        let mut r = self.xor_out;
        if self.ref_reg != self.ref_out {
          r = $reflect(r);
        }
        r = bitwise_update_wide(self.actual_poly(), r, 0, self.ref_reg);
        if self.ref_reg != self.ref_in {
          r = $reflect(r);
        }
        r
      }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Bit-by-bit kernel
    // ─────────────────────────────────────────────────────────────────────

    const MSB_MASK: $t = 1 << ($width - 1);

    /// MSB-first shift-register update over the top `num_bits` bits of `b`.
    ///
    /// Callers passing fewer than eight bits must leave the unused low bits
    /// of `b` zero.
    const fn bitwise_update(poly: $t, mut crc: $t, b: u8, num_bits: u32) -> $t {
      crc ^= (b as $t) << ($width - 8);
      let mut i = 0;
      while i < num_bits {
        crc = if crc & MSB_MASK != 0 { (crc << 1) ^ poly } else { crc << 1 };
        i += 1;
      }
      crc
    }

    /// LSB-first shift-register update over the bottom `num_bits` bits of
    /// `b`. `poly` must already be in reflected form.
    const fn bitwise_update_reflected(poly: $t, mut crc: $t, b: u8, num_bits: u32) -> $t {
      crc ^= b as $t;
      let mut i = 0;
      while i < num_bits {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        i += 1;
      }
      crc
    }

    /// Absorb one full register-width word in a single call.
    ///
    /// Used by the residue derivation, which feeds exactly `width` zero
    /// bits through the register.
    const fn bitwise_update_wide(poly: $t, mut crc: $t, word: $t, reflect: bool) -> $t {
      crc ^= word;
      let mut i = 0;
      while i < $width {
        crc = if reflect {
          if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 }
        } else if crc & MSB_MASK != 0 {
          (crc << 1) ^ poly
        } else {
          crc << 1
        };
        i += 1;
      }
      crc
    }

    // ─────────────────────────────────────────────────────────────────────
    // Table generation
    // ─────────────────────────────────────────────────────────────────────

    /// Register state after absorbing the single byte `index` from zero.
    ///
    /// `skip_bits` register steps known to only zero-extend are elided;
    /// the byte must be pre-positioned accordingly (the fast constructors
    /// below pass nibble-aligned indices).
    const fn table_entry(poly: $t, reflect: bool, index: u8, skip_bits: u32) -> $t {
      if reflect {
        bitwise_update_reflected(poly, 0, index >> skip_bits, 8 - skip_bits)
      } else {
        bitwise_update(poly, 0, index << skip_bits, 8 - skip_bits)
      }
    }

    /// Fast 256-entry construction.
    ///
    /// Computes the sixteen low-nibble entries and the fifteen high-nibble
    /// seeds directly, then fills the rest through the linearity identity
    /// `table[k ^ i] == table[k] ^ table[i]`.
    const fn table_entries(poly: $t, reflect: bool) -> [$t; 256] {
      // Which nibble of a seed byte is zero (and therefore skippable)
      // depends on the shift direction.
      let low_nibble_skip: u32 = if reflect { 0 } else { 4 };
      let high_nibble_skip: u32 = if reflect { 4 } else { 0 };

      let mut entries: [$t; 256] = [0; 256];
      let mut i = 1;
      while i < 0x10 {
        entries[i] = table_entry(poly, reflect, i as u8, low_nibble_skip);
        i += 1;
      }
      let mut k = 0x10;
      while k < 0x100 {
        entries[k] = table_entry(poly, reflect, k as u8, high_nibble_skip);
        let mut i = 1;
        while i < 0x10 {
          entries[k ^ i] = entries[k] ^ entries[i];
          i += 1;
        }
        k += 0x10;
      }
      entries
    }

    /// Seed vectors for [`SmallTable`]: the sixteen low-nibble entries and
    /// the sixteen high-nibble seeds of the full table.
    const fn small_table_entries(poly: $t, reflect: bool) -> ([$t; 16], [$t; 16]) {
      let low_nibble_skip: u32 = if reflect { 0 } else { 4 };
      let high_nibble_skip: u32 = if reflect { 4 } else { 0 };

      let mut row: [$t; 16] = [0; 16];
      let mut col: [$t; 16] = [0; 16];
      let mut i = 1;
      while i < 0x10 {
        row[i] = table_entry(poly, reflect, i as u8, low_nibble_skip);
        col[i] = table_entry(poly, reflect, (i << 4) as u8, high_nibble_skip);
        i += 1;
      }
      (row, col)
    }

    /// 256-entry lookup table in the register convention of its model.
    ///
    /// A table is a pure function of `(width, actual_poly, ref_reg)`; two
    /// models agreeing on those three values produce bit-identical tables
    /// and may share one instance.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Table {
      entries: [$t; 256],
    }

    impl Table {
      /// Generate the table for `params`.
      #[must_use]
      pub const fn new(params: &Params) -> Self {
        Self {
          entries: table_entries(params.actual_poly(), params.ref_reg),
        }
      }

      /// Reserve storage without generating the contents.
      ///
      /// The entries are all zero until [`generate`](Self::generate) runs;
      /// feeding data through such a table yields garbage checksums (but
      /// nothing worse).
      #[must_use]
      pub const fn uninit() -> Self {
        Self { entries: [0; 256] }
      }

      /// Fill a deferred table in place.
      pub fn generate(&mut self, params: &Params) {
        self.entries = table_entries(params.actual_poly(), params.ref_reg);
      }

      /// The entry for byte `index`.
      #[inline]
      #[must_use]
      pub const fn lookup(&self, index: u8) -> $t {
        self.entries[index as usize]
      }
    }

    /// Nibble-decomposed lookup table: one eighth the size of [`Table`].
    ///
    /// Stores sixteen low-nibble entries and sixteen high-nibble seeds; a
    /// lookup is reconstructed as `row[b & 0xF] ^ col[b >> 4]`, turning one
    /// load into two loads and a XOR.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SmallTable {
      row: [$t; 16],
      col: [$t; 16],
    }

    impl SmallTable {
      /// Generate the table for `params`.
      #[must_use]
      pub const fn new(params: &Params) -> Self {
        let (row, col) = small_table_entries(params.actual_poly(), params.ref_reg);
        Self { row, col }
      }

      /// Reserve storage without generating the contents.
      ///
      /// See [`Table::uninit`].
      #[must_use]
      pub const fn uninit() -> Self {
        Self {
          row: [0; 16],
          col: [0; 16],
        }
      }

      /// Fill a deferred table in place.
      pub fn generate(&mut self, params: &Params) {
        let (row, col) = small_table_entries(params.actual_poly(), params.ref_reg);
        self.row = row;
        self.col = col;
      }

      /// The reconstructed entry for byte `index`.
      #[inline]
      #[must_use]
      pub const fn lookup(&self, index: u8) -> $t {
        self.row[(index & 0x0F) as usize] ^ self.col[(index >> 4) as usize]
      }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Per-byte strategy steps
    // ─────────────────────────────────────────────────────────────────────

    // The 8-bit register admits the shift-free form `table[crc ^ b]` in
    // both conventions. The wrapping shifts keep the dead wide-register
    // branches compiling in that instantiation; `$width` is a constant, so
    // the selection folds away.
    #[allow(clippy::unnecessary_cast)]
    #[inline]
    const fn table_step(table: &Table, crc: $t, b: u8, reflect: bool) -> $t {
      if $width == 8 {
        table.lookup((crc & 0xFF) as u8 ^ b)
      } else if reflect {
        table.lookup((crc & 0xFF) as u8 ^ b) ^ crc.wrapping_shr(8)
      } else {
        table.lookup(crc.wrapping_shr($width - 8) as u8 ^ b) ^ crc.wrapping_shl(8)
      }
    }

    #[allow(clippy::unnecessary_cast)]
    #[inline]
    const fn small_table_step(table: &SmallTable, crc: $t, b: u8, reflect: bool) -> $t {
      if $width == 8 {
        table.lookup((crc & 0xFF) as u8 ^ b)
      } else if reflect {
        table.lookup((crc & 0xFF) as u8 ^ b) ^ crc.wrapping_shr(8)
      } else {
        table.lookup(crc.wrapping_shr($width - 8) as u8 ^ b) ^ crc.wrapping_shl(8)
      }
    }

    // Input reflection happens here and only here: when the input
    // convention differs from the register convention, every byte is
    // bit-reversed before it reaches the register.

    const fn update_tableless(params: &Params, mut crc: $t, bytes: &[u8]) -> $t {
      let poly = params.actual_poly();
      let swap = params.ref_in != params.ref_reg;
      let mut i = 0;
      while i < bytes.len() {
        let b = if swap { $crate::reflect::reflect_8(bytes[i]) } else { bytes[i] };
        crc = if params.ref_reg {
          bitwise_update_reflected(poly, crc, b, 8)
        } else {
          bitwise_update(poly, crc, b, 8)
        };
        i += 1;
      }
      crc
    }

    const fn update_table(params: &Params, table: &Table, mut crc: $t, bytes: &[u8]) -> $t {
      let swap = params.ref_in != params.ref_reg;
      let mut i = 0;
      while i < bytes.len() {
        let b = if swap { $crate::reflect::reflect_8(bytes[i]) } else { bytes[i] };
        crc = table_step(table, crc, b, params.ref_reg);
        i += 1;
      }
      crc
    }

    const fn update_small_table(params: &Params, table: &SmallTable, mut crc: $t, bytes: &[u8]) -> $t {
      let swap = params.ref_in != params.ref_reg;
      let mut i = 0;
      while i < bytes.len() {
        let b = if swap { $crate::reflect::reflect_8(bytes[i]) } else { bytes[i] };
        crc = small_table_step(table, crc, b, params.ref_reg);
        i += 1;
      }
      crc
    }

    /// Register as observed through the output convention, before the
    /// final XOR.
    const fn register_residue(params: &Params, reg: $t) -> $t {
      if params.ref_reg != params.ref_out { $reflect(reg) } else { reg }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Self-contained engines
    // ─────────────────────────────────────────────────────────────────────

    #[derive(Clone)]
    enum Mode {
      Tableless,
      Table(Table),
      SmallTable(SmallTable),
    }

    /// A CRC model bound to a self-contained calculation strategy.
    ///
    /// Construct one per model, typically in a `const` or `static`, so that
    /// any embedded table is generated at compile time and shared
    /// process-wide:
    ///
    /// ```
    /// use parametric_crc::crc16;
    ///
    /// const XMODEM: crc16::Crc = crc16::Crc::table_based(crc16::XMODEM);
    /// assert_eq!(XMODEM.calculate(b"123456789"), 0x31C3);
    /// ```
    ///
    /// For manual control over table lifetime and placement, use
    /// [`ExtCrc`] / [`ExtSmallCrc`] instead.
    #[derive(Clone)]
    pub struct Crc {
      params: Params,
      mode: Mode,
    }

    impl Crc {
      /// Bit-by-bit engine; slowest, but needs no table memory.
      #[must_use]
      pub const fn tableless(params: Params) -> Self {
        Self {
          params,
          mode: Mode::Tableless,
        }
      }

      /// Engine with an embedded 256-entry table. The comfortable
      /// high-performance default.
      #[must_use]
      pub const fn table_based(params: Params) -> Self {
        Self {
          mode: Mode::Table(Table::new(&params)),
          params,
        }
      }

      /// Engine with an embedded 16+16-entry nibble table, for when table
      /// memory is scarce.
      #[must_use]
      pub const fn small_table_based(params: Params) -> Self {
        Self {
          mode: Mode::SmallTable(SmallTable::new(&params)),
          params,
        }
      }

      /// The model parameters.
      #[must_use]
      pub const fn params(&self) -> &Params {
        &self.params
      }

      /// The residue constant of the model.
      #[must_use]
      pub const fn residue(&self) -> $t {
        self.params.residue()
      }

      /// Name of the bound strategy, for diagnostics.
      #[must_use]
      pub const fn strategy_name(&self) -> &'static str {
        match self.mode {
          Mode::Tableless => "tableless",
          Mode::Table(_) => "table",
          Mode::SmallTable(_) => "small-table",
        }
      }

      /// One-shot CRC of `bytes`.
      ///
      /// Usable in const context; a literal model applied to literal input
      /// folds to a constant.
      #[must_use]
      pub const fn calculate(&self, bytes: &[u8]) -> $t {
        let reg = self.update_register(self.params.actual_init(), bytes);
        register_residue(&self.params, reg) ^ self.params.xor_out
      }

      /// Start a streaming digest at the model's initial register.
      #[must_use]
      pub const fn digest(&self) -> Digest<'_> {
        Digest {
          crc: self,
          reg: self.params.actual_init(),
        }
      }

      /// Resume a streaming digest from an [`interim`](Digest::interim)
      /// register of a same-model digest.
      ///
      /// Values returned by [`finalize`](Digest::finalize) are not valid
      /// here; no validation is performed.
      #[must_use]
      pub const fn digest_from_interim(&self, reg: $t) -> Digest<'_> {
        Digest { crc: self, reg }
      }

      const fn update_register(&self, reg: $t, bytes: &[u8]) -> $t {
        match &self.mode {
          Mode::Tableless => update_tableless(&self.params, reg, bytes),
          Mode::Table(table) => update_table(&self.params, table, reg, bytes),
          Mode::SmallTable(table) => update_small_table(&self.params, table, reg, bytes),
        }
      }
    }

    impl core::fmt::Debug for Crc {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Crc")
          .field("params", &self.params)
          .field("strategy", &self.strategy_name())
          .finish()
      }
    }

    /// Streaming state for a [`Crc`] engine.
    ///
    /// Holds the single interim register, always in the register
    /// convention. Finalization is pure, so a digest can keep absorbing
    /// input afterwards.
    #[derive(Clone)]
    pub struct Digest<'a> {
      crc: &'a Crc,
      reg: $t,
    }

    impl Digest<'_> {
      /// Absorb a byte sequence.
      pub fn update(&mut self, bytes: &[u8]) {
        self.reg = self.crc.update_register(self.reg, bytes);
      }

      /// Absorb one byte.
      pub fn update_byte(&mut self, b: u8) {
        self.update(&[b]);
      }

      /// The raw register, for pause/resume through
      /// [`Crc::digest_from_interim`]. Not a final digest.
      #[must_use]
      pub const fn interim(&self) -> $t {
        self.reg
      }

      /// The register observed through the output convention, before the
      /// final XOR. After absorbing a valid codeword this equals
      /// [`Params::residue`].
      #[must_use]
      pub const fn residue_of_register(&self) -> $t {
        register_residue(&self.crc.params, self.reg)
      }

      /// The final CRC value.
      #[must_use]
      pub const fn finalize(&self) -> $t {
        self.residue_of_register() ^ self.crc.params.xor_out
      }
    }

    impl traits::Checksum for Digest<'_> {
      const OUTPUT_SIZE: usize = $width / 8;
      type Output = $t;

      #[inline]
      fn update(&mut self, data: &[u8]) {
        Digest::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> $t {
        Digest::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        self.reg = self.crc.params.actual_init();
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for Digest<'_> {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }

    // ─────────────────────────────────────────────────────────────────────
    // External-table engines
    // ─────────────────────────────────────────────────────────────────────

    /// A CRC model whose 256-entry table is supplied by the caller on every
    /// call.
    ///
    /// This gives manual control over the lifetime and memory placement of
    /// the table. The table must have been generated for the same
    /// `(width, actual_poly, ref_reg)` as this model; the width is enforced
    /// by the type, the rest is the caller's contract.
    ///
    /// ```
    /// use parametric_crc::crc32;
    ///
    /// const PKZIP: crc32::ExtCrc = crc32::ExtCrc::new(crc32::PKZIP);
    /// let table = PKZIP.make_table();
    /// assert_eq!(PKZIP.calculate(b"123456789", &table), 0xCBF4_3926);
    /// ```
    #[derive(Clone, Copy, Debug)]
    pub struct ExtCrc {
      params: Params,
    }

    impl ExtCrc {
      /// Bind a model.
      #[must_use]
      pub const fn new(params: Params) -> Self {
        Self { params }
      }

      /// The model parameters.
      #[must_use]
      pub const fn params(&self) -> &Params {
        &self.params
      }

      /// The residue constant of the model.
      #[must_use]
      pub const fn residue(&self) -> $t {
        self.params.residue()
      }

      /// Generate a table matching this model. The caller owns it and may
      /// place it in a `const`, a `static`, or on the stack.
      #[must_use]
      pub const fn make_table(&self) -> Table {
        Table::new(&self.params)
      }

      /// One-shot CRC of `bytes` through `table`.
      #[must_use]
      pub const fn calculate(&self, bytes: &[u8], table: &Table) -> $t {
        let reg = update_table(&self.params, table, self.params.actual_init(), bytes);
        register_residue(&self.params, reg) ^ self.params.xor_out
      }

      /// Start a streaming digest at the model's initial register.
      #[must_use]
      pub const fn digest(&self) -> ExtDigest<'_> {
        ExtDigest {
          crc: self,
          reg: self.params.actual_init(),
        }
      }

      /// Resume a streaming digest from an [`interim`](ExtDigest::interim)
      /// register of a same-model digest.
      #[must_use]
      pub const fn digest_from_interim(&self, reg: $t) -> ExtDigest<'_> {
        ExtDigest { crc: self, reg }
      }
    }

    /// Streaming state for an [`ExtCrc`] engine; `update` takes the
    /// caller-owned table.
    #[derive(Clone)]
    pub struct ExtDigest<'a> {
      crc: &'a ExtCrc,
      reg: $t,
    }

    impl ExtDigest<'_> {
      /// Absorb a byte sequence through `table`.
      pub fn update(&mut self, bytes: &[u8], table: &Table) {
        self.reg = update_table(&self.crc.params, table, self.reg, bytes);
      }

      /// Absorb one byte through `table`.
      pub fn update_byte(&mut self, b: u8, table: &Table) {
        self.update(&[b], table);
      }

      /// The raw register, for pause/resume.
      #[must_use]
      pub const fn interim(&self) -> $t {
        self.reg
      }

      /// The register observed through the output convention, before the
      /// final XOR.
      #[must_use]
      pub const fn residue_of_register(&self) -> $t {
        register_residue(&self.crc.params, self.reg)
      }

      /// The final CRC value.
      #[must_use]
      pub const fn finalize(&self) -> $t {
        self.residue_of_register() ^ self.crc.params.xor_out
      }
    }

    /// A CRC model whose 16+16-entry nibble table is supplied by the caller
    /// on every call.
    ///
    /// See [`ExtCrc`] for the ownership contract.
    #[derive(Clone, Copy, Debug)]
    pub struct ExtSmallCrc {
      params: Params,
    }

    impl ExtSmallCrc {
      /// Bind a model.
      #[must_use]
      pub const fn new(params: Params) -> Self {
        Self { params }
      }

      /// The model parameters.
      #[must_use]
      pub const fn params(&self) -> &Params {
        &self.params
      }

      /// The residue constant of the model.
      #[must_use]
      pub const fn residue(&self) -> $t {
        self.params.residue()
      }

      /// Generate a nibble table matching this model.
      #[must_use]
      pub const fn make_table(&self) -> SmallTable {
        SmallTable::new(&self.params)
      }

      /// One-shot CRC of `bytes` through `table`.
      #[must_use]
      pub const fn calculate(&self, bytes: &[u8], table: &SmallTable) -> $t {
        let reg = update_small_table(&self.params, table, self.params.actual_init(), bytes);
        register_residue(&self.params, reg) ^ self.params.xor_out
      }

      /// Start a streaming digest at the model's initial register.
      #[must_use]
      pub const fn digest(&self) -> ExtSmallDigest<'_> {
        ExtSmallDigest {
          crc: self,
          reg: self.params.actual_init(),
        }
      }

      /// Resume a streaming digest from an
      /// [`interim`](ExtSmallDigest::interim) register of a same-model
      /// digest.
      #[must_use]
      pub const fn digest_from_interim(&self, reg: $t) -> ExtSmallDigest<'_> {
        ExtSmallDigest { crc: self, reg }
      }
    }

    /// Streaming state for an [`ExtSmallCrc`] engine.
    #[derive(Clone)]
    pub struct ExtSmallDigest<'a> {
      crc: &'a ExtSmallCrc,
      reg: $t,
    }

    impl ExtSmallDigest<'_> {
      /// Absorb a byte sequence through `table`.
      pub fn update(&mut self, bytes: &[u8], table: &SmallTable) {
        self.reg = update_small_table(&self.crc.params, table, self.reg, bytes);
      }

      /// Absorb one byte through `table`.
      pub fn update_byte(&mut self, b: u8, table: &SmallTable) {
        self.update(&[b], table);
      }

      /// The raw register, for pause/resume.
      #[must_use]
      pub const fn interim(&self) -> $t {
        self.reg
      }

      /// The register observed through the output convention, before the
      /// final XOR.
      #[must_use]
      pub const fn residue_of_register(&self) -> $t {
        register_residue(&self.crc.params, self.reg)
      }

      /// The final CRC value.
      #[must_use]
      pub const fn finalize(&self) -> $t {
        self.residue_of_register() ^ self.crc.params.xor_out
      }
    }
  };
}
