/// Binary operators allowed in a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Shl,
    Shr,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// Addition and subtraction bind tighter than the shifts, the reverse of
    /// the C family.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Shl | Operator::Shr => 1,
        }
    }

    /// Apply the operator to two `i32` operands.
    ///
    /// Addition and subtraction wrap on overflow. Shift counts are masked to
    /// their low five bits, so negative or oversized counts never panic, and
    /// `>>` keeps the sign. The generator, the solver and the evaluator all
    /// go through this function.
    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
            Operator::Shl => lhs.wrapping_shl(rhs as u32),
            Operator::Shr => lhs.wrapping_shr(rhs as u32),
        }
    }
}

/// One oriented way of joining two sub-expressions `a` and `b`.
///
/// `swapped == false` renders `(a op b)`, `swapped == true` renders `(b op a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub operator: Operator,
    pub swapped: bool,
}

impl Combination {
    pub const fn new(operator: Operator, swapped: bool) -> Self {
        Self { operator, swapped }
    }

    /// Value of `a op b` (or `b op a` when swapped)
    pub fn apply(self, a: i32, b: i32) -> i32 {
        if self.swapped {
            self.operator.apply(b, a)
        } else {
            self.operator.apply(a, b)
        }
    }
}

/// Order in which the generator emits combinations of each operand pair.
///
/// Addition is commutative so only `a + b` appears.
pub const GENERATION_ORDER: [Combination; 7] = [
    Combination::new(Operator::Add, false),
    Combination::new(Operator::Sub, false),
    Combination::new(Operator::Sub, true),
    Combination::new(Operator::Shl, false),
    Combination::new(Operator::Shl, true),
    Combination::new(Operator::Shr, false),
    Combination::new(Operator::Shr, true),
];

/// Order in which the solver's partition search tries each operand pair.
///
/// Shifts come first. Together with the partition and pair order this fixes
/// which witness is returned when several exist.
pub const SEARCH_ORDER: [Combination; 7] = [
    Combination::new(Operator::Shl, false),
    Combination::new(Operator::Shl, true),
    Combination::new(Operator::Shr, false),
    Combination::new(Operator::Shr, true),
    Combination::new(Operator::Add, false),
    Combination::new(Operator::Sub, false),
    Combination::new(Operator::Sub, true),
];
