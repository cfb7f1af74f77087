// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector generator: one `{family}{n}` module per descriptor.
//!
//! Emits, in order: the struct, constants, constructors (all-scalar, broadcast,
//! arity patterns), aggregates, checked indexing, swizzles, conversion methods,
//! trait impls (indexing, arithmetic, `From`, `Display`), and finally the nested
//! `math` module of component-wise free functions.
//!
//! Sibling vectors of the same family are assumed to use a prefix of this
//! descriptor's component list (`Vec2` is `x, y` when `Vec3` is `x, y, z`).

use crate::conventions::{self, ConversionKind, ScalarType};
use crate::descriptor::VectorDescriptor;
use crate::emit::EmissionBuffer;
use crate::error::GenError;
use crate::registry::Generator;

const PATTERNS_3: &[&[usize]] = &[&[2, 1], &[1, 2]];
const PATTERNS_4: &[&[usize]] = &[&[2, 2], &[2, 1, 1], &[1, 2, 1], &[1, 1, 2], &[3, 1], &[1, 3]];

/// Hand-written constructor groupings per component count.
///
/// Deliberately not a general partition enumeration: the list is the public
/// constructor surface.
pub fn arity_patterns(n: usize) -> &'static [&'static [usize]] {
    match n {
        3 => PATTERNS_3,
        4 => PATTERNS_4,
        _ => &[],
    }
}

/// One swizzle accessor: the component indices it reads, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwizzleEntry {
    /// Indices into the component list, repetition allowed.
    pub indices: Vec<usize>,
    /// `true` iff the indices are pairwise distinct, i.e. a setter is offered.
    pub read_and_write: bool,
}

impl SwizzleEntry {
    /// Builds an entry, deriving `read_and_write` from the indices.
    pub fn new(indices: Vec<usize>) -> Self {
        let read_and_write = indices
            .iter()
            .enumerate()
            .all(|(i, idx)| !indices[..i].contains(idx));
        Self {
            indices,
            read_and_write,
        }
    }

    /// Accessor name: the indexed component names concatenated.
    pub fn name(&self, components: &[String]) -> String {
        self.indices
            .iter()
            .map(|&i| components[i].as_str())
            .collect()
    }

    /// Number of components read.
    pub fn arity(&self) -> usize {
        self.indices.len()
    }
}

/// All swizzles of an `n`-component vector.
///
/// For each length `L` in `2..=n`, counts through the `n^L` index sequences as a
/// mixed-radix number whose first position is the least significant digit.
pub fn swizzles(n: usize) -> Vec<SwizzleEntry> {
    let mut out = Vec::new();
    for len in 2..=n {
        let mut digits = vec![0usize; len];
        loop {
            out.push(SwizzleEntry::new(digits.clone()));
            let mut pos = 0;
            while pos < len {
                digits[pos] += 1;
                if digits[pos] < n {
                    break;
                }
                digits[pos] = 0;
                pos += 1;
            }
            if pos == len {
                break;
            }
        }
    }
    out
}

/// A component-wise free function built from a per-component template.
///
/// `{p}` in the template is replaced by `p.<component>` for each parameter `p`,
/// and `{two}` by the scalar literal `2`.
struct ComponentFn {
    name: &'static str,
    params: &'static [&'static str],
    template: &'static str,
    float_only: bool,
    doc: &'static str,
}

const COMPONENT_FNS: &[ComponentFn] = &[
    ComponentFn {
        name: "floor",
        params: &["a"],
        template: "{a}.floor()",
        float_only: true,
        doc: "Component-wise floor.",
    },
    ComponentFn {
        name: "fract",
        params: &["a"],
        template: "{a} - {a}.floor()",
        float_only: true,
        doc: "Component-wise fractional part, `a - floor(a)`.",
    },
    ComponentFn {
        name: "sqrt",
        params: &["a"],
        template: "{a}.sqrt()",
        float_only: true,
        doc: "Component-wise square root.",
    },
    ComponentFn {
        name: "pow",
        params: &["a", "b"],
        template: "{a}.powf({b})",
        float_only: true,
        doc: "Component-wise `a` raised to `b`.",
    },
    ComponentFn {
        name: "sin",
        params: &["a"],
        template: "{a}.sin()",
        float_only: true,
        doc: "Component-wise sine (radians).",
    },
    ComponentFn {
        name: "cos",
        params: &["a"],
        template: "{a}.cos()",
        float_only: true,
        doc: "Component-wise cosine (radians).",
    },
    ComponentFn {
        name: "tan",
        params: &["a"],
        template: "{a}.tan()",
        float_only: true,
        doc: "Component-wise tangent (radians).",
    },
    ComponentFn {
        name: "abs",
        params: &["a"],
        template: "{a}.abs()",
        float_only: false,
        doc: "Component-wise absolute value.",
    },
    ComponentFn {
        name: "min",
        params: &["a", "b"],
        template: "{a}.min({b})",
        float_only: false,
        doc: "Component-wise minimum.",
    },
    ComponentFn {
        name: "max",
        params: &["a", "b"],
        template: "{a}.max({b})",
        float_only: false,
        doc: "Component-wise maximum.",
    },
    ComponentFn {
        name: "lerp",
        params: &["a", "b", "t"],
        template: "{a} + ({b} - {a}) * {t}",
        float_only: false,
        doc: "Component-wise linear interpolation, `a + (b - a) * t`.",
    },
    ComponentFn {
        name: "bezier",
        params: &["a", "b", "c", "t"],
        template: "{a} + (({b} - {a}) * {two} + ({c} - {b} * {two} + {a}) * {t}) * {t}",
        float_only: false,
        doc: "Component-wise quadratic Bézier through `a`, `b`, `c` at `t`.",
    },
];

impl ComponentFn {
    fn expand(&self, component: &str, scalar: ScalarType) -> String {
        let mut expr = self.template.replace("{two}", &scalar.literal(2));
        for param in self.params {
            expr = expr.replace(&format!("{{{param}}}"), &format!("{param}.{component}"));
        }
        expr
    }
}

/// Emits one vector type from a [`VectorDescriptor`].
#[derive(Debug, Clone)]
pub struct VectorGenerator {
    desc: VectorDescriptor,
}

impl VectorGenerator {
    /// Wraps a validated descriptor.
    pub fn new(desc: VectorDescriptor) -> Self {
        Self { desc }
    }
}

impl Generator for VectorGenerator {
    fn artifact_name(&self) -> String {
        self.desc.artifact_name()
    }

    fn generate(&self) -> Result<EmissionBuffer, GenError> {
        let mut emitter = VectorEmitter::new(&self.desc);
        emitter.emit();
        Ok(emitter.buf)
    }
}

struct VectorEmitter<'a> {
    desc: &'a VectorDescriptor,
    comps: &'a [String],
    ty: String,
    scalar: ScalarType,
    s: &'static str,
    buf: EmissionBuffer,
}

impl<'a> VectorEmitter<'a> {
    fn new(desc: &'a VectorDescriptor) -> Self {
        Self {
            desc,
            comps: desc.components(),
            ty: desc.type_name(),
            scalar: desc.scalar(),
            s: desc.scalar().rust_type(),
            buf: EmissionBuffer::new(),
        }
    }

    fn n(&self) -> usize {
        self.comps.len()
    }

    /// `f(component)` for every component, comma separated.
    fn each(&self, f: impl Fn(&str) -> String) -> String {
        self.comps
            .iter()
            .map(|c| f(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn scalar_tuple(&self) -> String {
        format!("({})", vec![self.s; self.n()].join(", "))
    }

    fn doc(&mut self, text: &str) {
        self.buf.write_line(format!("/// {text}"));
    }

    fn emit(&mut self) {
        let name = self.desc.artifact_name();
        self.buf.write_line(format!(
            "// Generated by linmath-gen from `{name}` ({}, components [{}]). Do not edit.",
            self.scalar,
            self.comps.join(", ")
        ));
        self.buf.write_line(format!(
            "/// {}-component `{}` vector module.",
            self.n(),
            self.s
        ));
        self.buf.open_block(format!("pub mod {name}"));
        self.buf.write_line("use super::*;");
        self.buf.blank_line();
        self.emit_struct();
        self.buf.blank_line();
        let ty = self.ty.clone();
        self.buf.open_block(format!("impl {ty}"));
        self.emit_constants();
        self.emit_constructors();
        self.emit_aggregates();
        self.emit_checked_index();
        self.emit_swizzles();
        self.emit_conversion_methods();
        self.buf.close_block();
        self.emit_index_impls();
        self.emit_operators();
        self.emit_from_impls();
        self.emit_display();
        self.emit_companion();
        self.buf.close_block();
    }

    fn emit_struct(&mut self) {
        let (n, s, ty) = (self.n(), self.s, self.ty.clone());
        self.doc(&format!("A vector of {n} `{s}` components."));
        self.buf.write_line("#[derive(Debug, Default, Clone, Copy, PartialEq)]");
        self.buf.write_line("#[repr(C)]");
        self.buf.open_block(format!("pub struct {ty}"));
        for c in self.comps {
            self.buf.write_line(format!("/// The `{c}` component."));
            self.buf.write_line(format!("pub {c}: {s},"));
        }
        self.buf.close_block();
    }

    fn literal_self(&self, value_at: impl Fn(usize) -> i32) -> String {
        let fields: Vec<String> = self
            .comps
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c}: {}", self.scalar.literal(value_at(i))))
            .collect();
        format!("Self {{ {} }}", fields.join(", "))
    }

    fn emit_constants(&mut self) {
        self.doc("All components zero.");
        let zero = self.literal_self(|_| 0);
        self.buf.write_line(format!("pub const ZERO: Self = {zero};"));
        for (i, c) in self.comps.iter().enumerate() {
            let unit = self.literal_self(|j| i32::from(i == j));
            self.buf.write_line(format!("/// Unit vector along `{c}`."));
            self.buf.write_line(format!("pub const UNIT_{}: Self = {unit};", c.to_uppercase()));
        }
        self.doc("All components one.");
        let ones = self.literal_self(|_| 1);
        self.buf.write_line(format!("pub const ONES: Self = {ones};"));
        self.doc("Number of components.");
        self.buf.write_line(format!("pub const COUNT: usize = {};", self.n()));
        self.doc("Size of the vector in bytes.");
        self.buf.write_line(format!(
            "pub const SIZE_IN_BYTES: usize = {};",
            self.scalar.size_in_bytes() * self.n()
        ));
    }

    fn emit_constructors(&mut self) {
        let s = self.s;
        self.buf.blank_line();
        self.doc("Creates a vector from its components.");
        let mut header = EmissionBuffer::new();
        header.write("pub const fn new(");
        header.write_separated(self.comps.iter().map(|c| format!("{c}: {s}")), ", ");
        header.write(") -> Self");
        self.buf.open_block(header.materialize());
        let fields = self.comps.join(", ");
        self.buf.write_line(format!("Self {{ {fields} }}"));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Creates a vector with every component set to `value`.");
        self.buf.open_block(format!("pub const fn splat(value: {s}) -> Self"));
        let fields = self.each(|c| format!("{c}: value"));
        self.buf.write_line(format!("Self {{ {fields} }}"));
        self.buf.close_block();

        for pattern in arity_patterns(self.n()) {
            self.emit_pattern_constructor(pattern);
        }
    }

    fn emit_pattern_constructor(&mut self, pattern: &[usize]) {
        let mut params = Vec::new();
        let mut fields = Vec::new();
        let mut group_names = Vec::new();
        let mut offset = 0;
        for &size in pattern {
            let covered = &self.comps[offset..offset + size];
            let param: String = covered.concat();
            if size == 1 {
                params.push(format!("{param}: {}", self.s));
                fields.push(param.clone());
            } else {
                params.push(format!("{param}: {}", self.desc.sibling_type(size)));
                for (i, target) in covered.iter().enumerate() {
                    fields.push(format!("{target}: {param}.{}", self.comps[i]));
                }
            }
            group_names.push(param);
            offset += size;
        }
        let shape: Vec<String> = pattern.iter().map(ToString::to_string).collect();
        self.buf.blank_line();
        self.doc(&format!(
            "Creates a vector from groups of sizes ({}), flattened left to right.",
            shape.join(", ")
        ));
        self.buf.open_block(format!(
            "pub const fn from_{}({}) -> Self",
            group_names.join("_"),
            params.join(", ")
        ));
        self.buf.write_line(format!("Self {{ {} }}", fields.join(", ")));
        self.buf.close_block();
    }

    fn emit_aggregates(&mut self) {
        let s = self.s;
        let sum: Vec<String> = self.comps.iter().map(|c| format!("self.{c}")).collect();
        let dot: Vec<String> = self
            .comps
            .iter()
            .map(|c| format!("self.{c} * rhs.{c}"))
            .collect();

        self.buf.blank_line();
        self.doc("Sum of all components, in declaration order.");
        self.buf.open_block(format!("pub fn sum(self) -> {s}"));
        self.buf.write_line(sum.join(" + "));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Dot product.");
        self.buf.open_block(format!("pub fn dot(self, rhs: Self) -> {s}"));
        self.buf.write_line(dot.join(" + "));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Squared length, `dot(self, self)`.");
        self.buf.open_block(format!("pub fn sqlength(self) -> {s}"));
        self.buf.write_line("self.dot(self)");
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Euclidean length.");
        let len_ty = self.scalar.length_type();
        self.buf.open_block(format!("pub fn length(self) -> {len_ty}"));
        if self.scalar.is_integral() {
            self.buf.write_line(format!("{len_ty}::from(self.sqlength()).sqrt()"));
        } else {
            self.buf.write_line("self.sqlength().sqrt()");
        }
        self.buf.close_block();

        if !self.scalar.is_integral() {
            self.buf.blank_line();
            self.doc("Unit-length copy of this vector.");
            self.buf.open_block("pub fn normalized(self) -> Self");
            self.buf.write_line("self / self.length()");
            self.buf.close_block();
        }

        if self.n() == 3 {
            let (x, y, z) = (&self.comps[0], &self.comps[1], &self.comps[2]);
            let term = |a: &str, b: &str| format!("self.{a} * rhs.{b} - self.{b} * rhs.{a}");
            let cross = format!("Self::new({}, {}, {})", term(y, z), term(z, x), term(x, y));
            self.buf.blank_line();
            self.doc("Cross product.");
            self.buf.open_block("pub fn cross(self, rhs: Self) -> Self");
            self.buf.write_line(cross);
            self.buf.close_block();
        }
    }

    fn emit_checked_index(&mut self) {
        let (s, ty) = (self.s, self.ty.clone());
        let comps = self.comps;

        self.buf.blank_line();
        self.doc("Reads the component at `index`.");
        self.buf
            .open_block(format!("pub fn get(&self, index: usize) -> Result<{s}, IndexOutOfRange>"));
        self.buf.open_block("match index");
        for (i, c) in comps.iter().enumerate() {
            self.buf.write_line(format!("{i} => Ok(self.{c}),"));
        }
        self.buf.write_line(format!("_ => Err(IndexOutOfRange::new(index, \"{ty}\")),"));
        self.buf.close_block();
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Writes the component at `index`.");
        self.buf.open_block(format!(
            "pub fn set(&mut self, index: usize, value: {s}) -> Result<(), IndexOutOfRange>"
        ));
        self.buf.open_block("match index");
        for (i, c) in comps.iter().enumerate() {
            self.buf.write_line(format!("{i} => self.{c} = value,"));
        }
        self.buf.write_line(format!("_ => return Err(IndexOutOfRange::new(index, \"{ty}\")),"));
        self.buf.close_block();
        self.buf.write_line("Ok(())");
        self.buf.close_block();
    }

    fn emit_swizzles(&mut self) {
        let comps = self.comps;
        for entry in swizzles(self.n()) {
            let name = entry.name(comps);
            let target = self.desc.sibling_type(entry.arity());
            let args: Vec<String> = entry
                .indices
                .iter()
                .map(|&i| format!("self.{}", comps[i]))
                .collect();
            self.buf.blank_line();
            self.doc(&format!("Swizzle `{name}`."));
            self.buf.open_block(format!("pub const fn {name}(self) -> {target}"));
            self.buf.write_line(format!("{target}::new({})", args.join(", ")));
            self.buf.close_block();

            if entry.read_and_write {
                self.doc(&format!("Writes `value` through swizzle `{name}`."));
                self.buf.open_block(format!("pub fn set_{name}(&mut self, value: {target})"));
                for (src, &dst) in entry.indices.iter().enumerate() {
                    self.buf.write_line(format!("self.{} = value.{};", comps[dst], comps[src]));
                }
                self.buf.close_block();
            }
        }
    }

    fn emit_conversion_methods(&mut self) {
        let (n, s) = (self.n(), self.s);
        let fields = self.each(|c| format!("self.{c}"));
        let tuple = self.scalar_tuple();

        self.buf.blank_line();
        self.doc("Components as an array.");
        self.buf.open_block(format!("pub const fn to_array(self) -> [{s}; {n}]"));
        self.buf.write_line(format!("[{fields}]"));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Components as a tuple, in declaration order.");
        self.buf.open_block(format!("pub const fn deconstruct(self) -> {tuple}"));
        self.buf.write_line(format!("({fields})"));
        self.buf.close_block();

        for other in ScalarType::ALL {
            if conventions::conversion(self.scalar, other) != Some(ConversionKind::Explicit) {
                continue;
            }
            let artifact = conventions::vector_artifact(other.vector_prefix(), n);
            let target = conventions::vector_type(other.vector_prefix(), n);
            let cast = other.rust_type();
            let args = self.each(|c| format!("self.{c} as {cast}"));
            self.buf.blank_line();
            self.doc(&format!(
                "Converts to [`{target}`] with an `as` cast per component; may truncate."
            ));
            self.buf.open_block(format!("pub fn as_{artifact}(self) -> {target}"));
            self.buf.write_line(format!("{target}::new({args})"));
            self.buf.close_block();
        }
    }

    fn emit_index_impls(&mut self) {
        let (s, ty) = (self.s, self.ty.clone());
        let comps = self.comps;
        for (trait_name, method, receiver, borrow) in [
            ("Index", "index", "&self", "&"),
            ("IndexMut", "index_mut", "&mut self", "&mut "),
        ] {
            self.buf.blank_line();
            self.buf.open_block(format!("impl core::ops::{trait_name}<usize> for {ty}"));
            if trait_name == "Index" {
                self.buf.write_line(format!("type Output = {s};"));
                self.buf.blank_line();
            }
            self.buf.open_block(format!("fn {method}({receiver}, index: usize) -> {borrow}{s}"));
            self.buf.open_block("match index");
            for (i, c) in comps.iter().enumerate() {
                self.buf.write_line(format!("{i} => {borrow}self.{c},"));
            }
            self.buf.write_line(format!(
                "_ => panic!(\"{{}}\", IndexOutOfRange::new(index, \"{ty}\")),"
            ));
            self.buf.close_block();
            self.buf.close_block();
            self.buf.close_block();
        }
    }

    fn emit_operators(&mut self) {
        let (s, ty) = (self.s, self.ty.clone());
        for (trait_name, method, op) in [
            ("Add", "add", "+"),
            ("Sub", "sub", "-"),
            ("Mul", "mul", "*"),
            ("Div", "div", "/"),
        ] {
            let header = format!("{trait_name} for {ty}");
            let args = self.each(|c| format!("self.{c} {op} rhs.{c}"));
            self.binary_impl(&header, method, "Self", "Self", &args);
        }
        for (trait_name, method, op) in [("Mul", "mul", "*"), ("Div", "div", "/")] {
            let header = format!("{trait_name}<{s}> for {ty}");
            let vs = self.each(|c| format!("self.{c} {op} rhs"));
            self.binary_impl(&header, method, s, "Self", &vs);
            let header = format!("{trait_name}<{ty}> for {s}");
            let sv = self.each(|c| format!("self {op} rhs.{c}"));
            self.binary_impl(&header, method, &ty, &ty, &sv);
        }

        let neg = self.each(|c| format!("-self.{c}"));
        self.buf.blank_line();
        self.buf.open_block(format!("impl core::ops::Neg for {ty}"));
        self.buf.write_line("type Output = Self;");
        self.buf.blank_line();
        self.buf.open_block("fn neg(self) -> Self");
        self.buf.write_line(format!("Self::new({neg})"));
        self.buf.close_block();
        self.buf.close_block();
    }

    fn binary_impl(&mut self, header: &str, method: &str, rhs: &str, output: &str, args: &str) {
        self.buf.blank_line();
        self.buf.open_block(format!("impl core::ops::{header}"));
        self.buf.write_line(format!("type Output = {output};"));
        self.buf.blank_line();
        self.buf.open_block(format!("fn {method}(self, rhs: {rhs}) -> {output}"));
        self.buf.write_line(format!("{output}::new({args})"));
        self.buf.close_block();
        self.buf.close_block();
    }

    fn emit_from_impls(&mut self) {
        let (n, s, ty) = (self.n(), self.s, self.ty.clone());
        let names = self.comps.join(", ");
        let tuple = self.scalar_tuple();

        self.emit_from_impl(
            &tuple,
            &ty,
            &format!("({names}): {tuple}"),
            &format!("Self::new({names})"),
        );
        self.emit_from_impl(
            &format!("[{s}; {n}]"),
            &ty,
            &format!("[{names}]: [{s}; {n}]"),
            &format!("Self::new({names})"),
        );
        self.emit_from_impl(s, &ty, &format!("value: {s}"), "Self::splat(value)");
        self.emit_from_impl(&ty, &tuple, &format!("v: {ty}"), "v.deconstruct()");

        for other in ScalarType::ALL {
            if conventions::conversion(self.scalar, other) != Some(ConversionKind::Implicit) {
                continue;
            }
            let target = conventions::vector_type(other.vector_prefix(), n);
            let cast = other.rust_type();
            let args = self.each(|c| format!("v.{c} as {cast}"));
            let body = format!("Self::new({args})");
            self.emit_from_impl(&ty, &target, &format!("v: {ty}"), &body);
        }
    }

    fn emit_from_impl(&mut self, source: &str, target: &str, param: &str, body: &str) {
        self.buf.blank_line();
        self.buf.open_block(format!("impl From<{source}> for {target}"));
        self.buf.open_block(format!("fn from({param}) -> Self"));
        self.buf.write_line(body);
        self.buf.close_block();
        self.buf.close_block();
    }

    fn emit_display(&mut self) {
        let ty = self.ty.clone();
        let holes = vec!["{}"; self.n()].join(", ");
        let args = self.each(|c| format!("self.{c}"));
        self.buf.blank_line();
        self.buf.open_block(format!("impl core::fmt::Display for {ty}"));
        self.buf.open_block(
            "fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result",
        );
        self.buf.write_line(format!("write!(f, \"({holes})\", {args})"));
        self.buf.close_block();
        self.buf.close_block();
    }

    /// Builds the `math` module in its own buffer and appends it.
    fn emit_companion(&mut self) {
        let (s, ty) = (self.s, self.ty.clone());
        let mut aux = EmissionBuffer::with_depth(self.buf.depth());
        aux.blank_line();
        aux.write_line(format!("/// Component-wise free functions over [`{ty}`]."));
        aux.open_block("pub mod math");
        aux.write_line(format!("use super::{ty};"));

        aux.blank_line();
        aux.write_line("/// Dot product of `a` and `b`.");
        aux.open_block(format!("pub fn dot(a: {ty}, b: {ty}) -> {s}"));
        aux.write_line("a.dot(b)");
        aux.close_block();

        for func in COMPONENT_FNS {
            if func.float_only && self.scalar.is_integral() {
                continue;
            }
            let params: Vec<String> = func.params.iter().map(|p| format!("{p}: {ty}")).collect();
            let args: Vec<String> = self
                .comps
                .iter()
                .map(|c| func.expand(c, self.scalar))
                .collect();
            aux.blank_line();
            aux.write_line(format!("/// {}", func.doc));
            aux.open_block(format!(
                "pub fn {}({}) -> {ty}",
                func.name,
                params.join(", ")
            ));
            aux.write_line(format!("{ty}::new({})", args.join(", ")));
            aux.close_block();
        }

        aux.blank_line();
        aux.write_line("/// Reflects `v` about `normal` (which need not be unit length).");
        aux.open_block(format!("pub fn reflect(v: {ty}, normal: {ty}) -> {ty}"));
        aux.write_line(format!(
            "v - normal * {} * (v.dot(normal) / normal.dot(normal))",
            self.scalar.literal(2)
        ));
        aux.close_block();

        aux.close_block();
        self.buf.append(&aux);
    }
}
