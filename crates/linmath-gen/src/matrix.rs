// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Matrix generator: one `{family}{r}x{c}` module per descriptor.
//!
//! Matrices are stored as `rows` row vectors of the descriptor scalar's vector
//! family, so row and column access reuse the vector API. Accessor names are
//! 1-based (`row1`, `col2`, `m13`); `get`/`set` indices are 0-based.

use crate::conventions::{self, COMPONENTS};
use crate::descriptor::{MatrixDescriptor, MATRIX_SIZES};
use crate::emit::EmissionBuffer;
use crate::error::GenError;
use crate::registry::Generator;

/// Emits one matrix type from a [`MatrixDescriptor`].
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    desc: MatrixDescriptor,
}

impl MatrixGenerator {
    /// Wraps a validated descriptor.
    pub fn new(desc: MatrixDescriptor) -> Self {
        Self { desc }
    }
}

impl Generator for MatrixGenerator {
    fn artifact_name(&self) -> String {
        self.desc.artifact_name()
    }

    fn generate(&self) -> Result<EmissionBuffer, GenError> {
        let mut emitter = MatrixEmitter::new(&self.desc);
        emitter.emit();
        Ok(emitter.buf)
    }
}

struct MatrixEmitter<'a> {
    desc: &'a MatrixDescriptor,
    ty: String,
    row_ty: String,
    col_ty: String,
    s: &'static str,
    buf: EmissionBuffer,
}

impl<'a> MatrixEmitter<'a> {
    fn new(desc: &'a MatrixDescriptor) -> Self {
        Self {
            desc,
            ty: desc.type_name(),
            row_ty: desc.vector_type(desc.cols()),
            col_ty: desc.vector_type(desc.rows()),
            s: desc.scalar().rust_type(),
            buf: EmissionBuffer::new(),
        }
    }

    fn rows(&self) -> usize {
        self.desc.rows()
    }

    fn cols(&self) -> usize {
        self.desc.cols()
    }

    fn lit(&self, value: i32) -> String {
        self.desc.scalar().literal(value)
    }

    /// `self.row{r}.{c}` for 0-based `r` and `c`.
    fn element(r: usize, c: usize) -> String {
        format!("self.row{}.{}", r + 1, COMPONENTS[c])
    }

    fn row_params(&self) -> String {
        (1..=self.rows())
            .map(|r| format!("row{r}: {}", self.row_ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn doc(&mut self, text: &str) {
        if text.is_empty() {
            self.buf.write_line("///");
        } else {
            self.buf.write_line(format!("/// {text}"));
        }
    }

    fn emit(&mut self) {
        let name = self.desc.artifact_name();
        let (rows, cols, s) = (self.rows(), self.cols(), self.s);
        self.buf.write_line(format!(
            "// Generated by linmath-gen from `{name}` ({}, {rows} rows x {cols} columns). Do not edit.",
            self.desc.scalar()
        ));
        self.buf.write_line(format!("/// {rows}x{cols} `{s}` matrix module."));
        self.buf.open_block(format!("pub mod {name}"));
        self.buf.write_line("use super::*;");
        self.buf.blank_line();
        self.emit_struct();
        self.buf.blank_line();
        let ty = self.ty.clone();
        self.buf.open_block(format!("impl {ty}"));
        self.emit_constants();
        self.emit_constructors();
        self.emit_columns();
        self.emit_elements();
        self.emit_checked_index();
        self.emit_transpose();
        if self.desc.is_square() {
            self.emit_square();
        }
        if rows == 4 && cols == 4 {
            self.emit_transform();
        }
        self.buf.close_block();
        self.emit_index_impls();
        self.emit_operators();
        self.emit_display();
        self.buf.close_block();
    }

    fn emit_struct(&mut self) {
        let (rows, cols, s, row_ty) = (self.rows(), self.cols(), self.s, self.row_ty.clone());
        self.doc(&format!(
            "A {rows}x{cols} matrix of `{s}`, stored as {rows} row vectors."
        ));
        self.buf.write_line("#[derive(Debug, Default, Clone, Copy, PartialEq)]");
        self.buf.write_line("#[repr(C)]");
        self.buf.open_block(format!("pub struct {}", self.ty));
        for r in 1..=rows {
            self.buf.write_line(format!("/// Row {r}."));
            self.buf.write_line(format!("pub row{r}: {row_ty},"));
        }
        self.buf.close_block();
    }

    fn emit_constants(&mut self) {
        self.doc("Number of rows.");
        self.buf.write_line(format!("pub const ROWS: usize = {};", self.rows()));
        self.doc("Number of columns.");
        self.buf.write_line(format!("pub const COLS: usize = {};", self.cols()));
        if self.desc.is_square() {
            let rows: Vec<String> = (0..self.rows())
                .map(|r| {
                    let values: Vec<String> = (0..self.cols())
                        .map(|c| self.lit(i32::from(r == c)))
                        .collect();
                    format!("row{}: {}::new({})", r + 1, self.row_ty, values.join(", "))
                })
                .collect();
            self.doc("Identity matrix.");
            self.buf.write_line(format!(
                "pub const IDENTITY: Self = Self {{ {} }};",
                rows.join(", ")
            ));
        }
    }

    fn emit_constructors(&mut self) {
        let (rows, cols, s) = (self.rows(), self.cols(), self.s);
        let row_names: Vec<String> = (1..=rows).map(|r| format!("row{r}")).collect();

        self.buf.blank_line();
        self.doc("Creates a matrix from its rows.");
        self.buf.open_block(format!("pub const fn new({}) -> Self", self.row_params()));
        self.buf.write_line(format!("Self {{ {} }}", row_names.join(", ")));
        self.buf.close_block();

        let mut header = EmissionBuffer::new();
        header.write("pub const fn from_scalars(");
        header.write_separated(
            (1..=rows).flat_map(|r| (1..=cols).map(move |c| format!("m{r}{c}: {s}"))),
            ", ",
        );
        header.write(") -> Self");
        let fields: Vec<String> = (1..=rows)
            .map(|r| {
                let values: Vec<String> = (1..=cols).map(|c| format!("m{r}{c}")).collect();
                format!("row{r}: {}::new({})", self.row_ty, values.join(", "))
            })
            .collect();
        self.buf.blank_line();
        self.doc("Creates a matrix from scalars in row-major order.");
        self.buf.open_block(header.materialize());
        self.buf.write_line(format!("Self {{ {} }}", fields.join(", ")));
        self.buf.close_block();

        if self.desc.is_square() {
            for k in MATRIX_SIZES.filter(|&k| k != rows) {
                self.emit_resize_constructor(k);
            }
        }
    }

    /// `from_mat{k}`: copies the overlapping top-left block, the rest comes from
    /// the identity.
    fn emit_resize_constructor(&mut self, k: usize) {
        let n = self.rows();
        let source = self.desc.sibling_type(k, k);
        let source_artifact = conventions::matrix_artifact(self.desc.family(), k, k);
        let fields: Vec<String> = (0..n)
            .map(|r| {
                let values: Vec<String> = (0..n)
                    .map(|c| {
                        if r < k && c < k {
                            format!("m.row{}.{}", r + 1, COMPONENTS[c])
                        } else {
                            self.lit(i32::from(r == c))
                        }
                    })
                    .collect();
                format!("row{}: {}::new({})", r + 1, self.row_ty, values.join(", "))
            })
            .collect();
        self.buf.blank_line();
        if k < n {
            self.doc(&format!(
                "Widens a [`{source}`] into the top-left block, padding from the identity."
            ));
        } else {
            self.doc(&format!("Keeps the top-left block of a [`{source}`]."));
        }
        self.buf.open_block(format!("pub const fn from_{source_artifact}(m: {source}) -> Self"));
        self.buf.write_line(format!("Self {{ {} }}", fields.join(", ")));
        self.buf.close_block();
    }

    fn emit_columns(&mut self) {
        let (rows, col_ty) = (self.rows(), self.col_ty.clone());
        for c in 0..self.cols() {
            let reads: Vec<String> = (0..rows).map(|r| Self::element(r, c)).collect();
            self.buf.blank_line();
            self.doc(&format!("Column {}.", c + 1));
            self.buf.open_block(format!("pub const fn col{}(&self) -> {col_ty}", c + 1));
            self.buf.write_line(format!("{col_ty}::new({})", reads.join(", ")));
            self.buf.close_block();

            self.doc(&format!("Writes column {}.", c + 1));
            self.buf.open_block(format!("pub fn set_col{}(&mut self, value: {col_ty})", c + 1));
            for (r, component) in COMPONENTS[..rows].iter().enumerate() {
                self.buf.write_line(format!("{} = value.{component};", Self::element(r, c)));
            }
            self.buf.close_block();
        }
    }

    fn emit_elements(&mut self) {
        let s = self.s;
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let (row, col) = (r + 1, c + 1);
                let element = Self::element(r, c);
                self.buf.blank_line();
                self.doc(&format!("Element at row {row}, column {col}."));
                self.buf.open_block(format!("pub const fn m{row}{col}(&self) -> {s}"));
                self.buf.write_line(&element);
                self.buf.close_block();
                self.doc(&format!("Writes the element at row {row}, column {col}."));
                self.buf.open_block(format!("pub fn set_m{row}{col}(&mut self, value: {s})"));
                self.buf.write_line(format!("{element} = value;"));
                self.buf.close_block();
            }
        }
    }

    fn emit_checked_index(&mut self) {
        let (s, ty, row_ty) = (self.s, self.ty.clone(), self.row_ty.clone());
        let rows = self.rows();

        self.buf.blank_line();
        self.doc("Row at `index`.");
        self.buf.open_block(format!(
            "pub fn row(&self, index: usize) -> Result<{row_ty}, IndexOutOfRange>"
        ));
        self.buf.open_block("match index");
        for r in 0..rows {
            self.buf.write_line(format!("{r} => Ok(self.row{}),", r + 1));
        }
        self.buf.write_line(format!("_ => Err(IndexOutOfRange::new(index, \"{ty}\")),"));
        self.buf.close_block();
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Reads the element at (`row`, `col`); the column is checked by the row vector.");
        self.buf.open_block(format!(
            "pub fn get(&self, row: usize, col: usize) -> Result<{s}, IndexOutOfRange>"
        ));
        self.buf.write_line("self.row(row)?.get(col)");
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Writes the element at (`row`, `col`).");
        self.buf.open_block(format!(
            "pub fn set(&mut self, row: usize, col: usize, value: {s}) -> Result<(), IndexOutOfRange>"
        ));
        self.buf.open_block("match row");
        for r in 0..rows {
            self.buf.write_line(format!("{r} => self.row{}.set(col, value),", r + 1));
        }
        self.buf.write_line(format!("_ => Err(IndexOutOfRange::new(row, \"{ty}\")),"));
        self.buf.close_block();
        self.buf.close_block();
    }

    fn emit_transpose(&mut self) {
        let target = self.desc.sibling_type(self.cols(), self.rows());
        let cols: Vec<String> = (1..=self.cols())
            .map(|c| format!("self.col{c}()"))
            .collect();
        self.buf.blank_line();
        self.doc("Transposed matrix: this matrix's columns become its rows.");
        self.buf.open_block(format!("pub const fn transpose(&self) -> {target}"));
        self.buf.write_line(format!("{target}::new({})", cols.join(", ")));
        self.buf.close_block();
    }

    fn emit_square(&mut self) {
        let (n, s, row_ty) = (self.rows(), self.s, self.row_ty.clone());
        let diagonal: Vec<String> = (0..n).map(|i| Self::element(i, i)).collect();

        self.buf.blank_line();
        self.doc("Main diagonal.");
        self.buf.open_block(format!("pub const fn diagonal(&self) -> {row_ty}"));
        self.buf.write_line(format!("{row_ty}::new({})", diagonal.join(", ")));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Writes the main diagonal.");
        self.buf.open_block(format!("pub fn set_diagonal(&mut self, value: {row_ty})"));
        for (i, element) in diagonal.iter().enumerate() {
            self.buf.write_line(format!("{element} = value.{};", COMPONENTS[i]));
        }
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Sum of the main diagonal.");
        self.buf.open_block(format!("pub fn trace(&self) -> {s}"));
        self.buf.write_line(diagonal.join(" + "));
        self.buf.close_block();
    }

    /// Affine helpers for 4x4 matrices: rows 1 to 3 carry the basis, row 4 the
    /// translation.
    fn emit_transform(&mut self) {
        let v3 = self.desc.vector_type(3);
        let xyz: String = COMPONENTS[..3].concat();
        let [x, y, z, _] = COMPONENTS;
        let (zero, basis) = (self.lit(0), 1..=3);

        self.buf.blank_line();
        self.doc(&format!(
            "Per-axis scale: lengths of the `{xyz}` parts of rows 1 to 3."
        ));
        self.buf.open_block(format!("pub fn scale(&self) -> {v3}"));
        let lengths: Vec<String> = basis
            .clone()
            .map(|r| format!("self.row{r}.{xyz}().length()"))
            .collect();
        self.buf.write_line(format!("{v3}::new({})", lengths.join(", ")));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc(&format!("Translation: the `{xyz}` part of row 4."));
        self.buf.open_block(format!("pub const fn translation(&self) -> {v3}"));
        self.buf.write_line(format!("self.row4.{xyz}()"));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc(&format!(
            "Normalizes the `{xyz}` parts of rows 1 to 3, removing scale."
        ));
        self.buf.open_block("pub fn clear_scale(&mut self)");
        for r in basis {
            self.buf
                .write_line(format!("self.row{r}.set_{xyz}(self.row{r}.{xyz}().normalized());"));
        }
        self.buf.close_block();

        self.buf.blank_line();
        self.doc("Zeroes the translation.");
        self.buf.open_block("pub fn clear_translation(&mut self)");
        self.buf.write_line(format!("self.row4.set_{xyz}({v3}::ZERO);"));
        self.buf.close_block();

        self.buf.blank_line();
        self.doc(&format!(
            "Replaces rows 1 to 3 with axis-aligned vectors of their current `{xyz}` lengths."
        ));
        self.doc("");
        self.doc("A lossy reset, not a polar decomposition. All three lengths are read");
        self.doc("before any row is written.");
        self.buf.open_block("pub fn clear_rotation(&mut self)");
        self.buf.write_line("let scale = self.scale();");
        self.buf.write_line(format!("self.row1.set_{xyz}({v3}::new(scale.{x}, {zero}, {zero}));"));
        self.buf.write_line(format!("self.row2.set_{xyz}({v3}::new({zero}, scale.{y}, {zero}));"));
        self.buf.write_line(format!("self.row3.set_{xyz}({v3}::new({zero}, {zero}, scale.{z}));"));
        self.buf.close_block();
    }

    fn emit_index_impls(&mut self) {
        let (s, ty) = (self.s, self.ty.clone());
        let rows = self.rows();
        for (trait_name, method, receiver, borrow) in [
            ("Index", "index", "&self", "&"),
            ("IndexMut", "index_mut", "&mut self", "&mut "),
        ] {
            self.buf.blank_line();
            self.buf.open_block(format!("impl core::ops::{trait_name}<(usize, usize)> for {ty}"));
            if trait_name == "Index" {
                self.buf.write_line(format!("type Output = {s};"));
                self.buf.blank_line();
            }
            self.buf.open_block(format!(
                "fn {method}({receiver}, (row, col): (usize, usize)) -> {borrow}{s}"
            ));
            self.buf.open_block("match row");
            for r in 0..rows {
                self.buf.write_line(format!("{r} => {borrow}self.row{}[col],", r + 1));
            }
            self.buf
                .write_line(format!("_ => panic!(\"{{}}\", IndexOutOfRange::new(row, \"{ty}\")),"));
            self.buf.close_block();
            self.buf.close_block();
            self.buf.close_block();
        }
    }

    fn emit_operators(&mut self) {
        let (rows, cols, s) = (self.rows(), self.cols(), self.s);
        let (ty, row_ty, col_ty) = (self.ty.clone(), self.row_ty.clone(), self.col_ty.clone());

        // Matrix times column vector: one dot product per row.
        let dots: Vec<String> = (1..=rows)
            .map(|r| format!("self.row{r}.dot(rhs)"))
            .collect();
        let body = format!("{col_ty}::new({})", dots.join(", "));
        self.mul_impl(&row_ty, &ty, &col_ty, &body);

        // Row vector times matrix: one dot product per column.
        let dots: Vec<String> = (1..=cols)
            .map(|c| format!("self.dot(rhs.col{c}())"))
            .collect();
        let body = format!("{row_ty}::new({})", dots.join(", "));
        self.mul_impl(&ty, &col_ty, &row_ty, &body);

        for k in MATRIX_SIZES {
            let rhs = self.desc.sibling_type(cols, k);
            let output = self.desc.sibling_type(rows, k);
            let dots: Vec<String> = (1..=rows)
                .flat_map(|r| (1..=k).map(move |c| format!("self.row{r}.dot(rhs.col{c}())")))
                .collect();
            self.mul_impl(
                &rhs,
                &ty,
                &output,
                &format!("{output}::from_scalars({})", dots.join(", ")),
            );
        }

        let scaled: Vec<String> = (1..=rows).map(|r| format!("self.row{r} * rhs")).collect();
        self.mul_impl(s, &ty, &ty, &format!("Self::new({})", scaled.join(", ")));
    }

    /// `impl Mul<rhs> for lhs`.
    fn mul_impl(&mut self, rhs: &str, lhs: &str, output: &str, body: &str) {
        self.buf.blank_line();
        self.buf.open_block(format!("impl core::ops::Mul<{rhs}> for {lhs}"));
        self.buf.write_line(format!("type Output = {output};"));
        self.buf.blank_line();
        self.buf.open_block(format!("fn mul(self, rhs: {rhs}) -> {output}"));
        self.buf.write_line(body);
        self.buf.close_block();
        self.buf.close_block();
    }

    fn emit_display(&mut self) {
        let ty = self.ty.clone();
        let holes = vec!["{}"; self.rows()].join(", ");
        let args: Vec<String> = (1..=self.rows()).map(|r| format!("self.row{r}")).collect();
        self.buf.blank_line();
        self.buf.open_block(format!("impl core::fmt::Display for {ty}"));
        self.buf.open_block(
            "fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result",
        );
        self.buf.write_line(format!("write!(f, \"[{holes}]\", {})", args.join(", ")));
        self.buf.close_block();
        self.buf.close_block();
    }
}
