use serde::{Deserialize, Serialize};

/// A mark property that is either shared by every instance or given per instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ScalarOrArray<T: Sync + Clone> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Sync + Clone> ScalarOrArray<T> {
    pub fn new_scalar(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }

    pub fn new_array(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }

    pub fn as_iter(&self, scalar_len: usize) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            ScalarOrArray::Scalar(value) => Box::new(std::iter::repeat(value).take(scalar_len)),
            ScalarOrArray::Array(values) => Box::new(values.iter()),
        }
    }

    pub fn as_vec(&self, scalar_len: usize) -> Vec<T> {
        self.as_iter(scalar_len).cloned().collect::<Vec<_>>()
    }

    /// Appends a value, promoting a scalar to an array of `len` copies first
    pub fn push(&mut self, len: usize, value: T) {
        if let ScalarOrArray::Scalar(scalar) = self {
            *self = ScalarOrArray::Array(vec![scalar.clone(); len]);
        }
        if let ScalarOrArray::Array(values) = self {
            values.push(value);
        }
    }
}

impl<T: Sync + Clone + Default> Default for ScalarOrArray<T> {
    fn default() -> Self {
        ScalarOrArray::Scalar(T::default())
    }
}

impl<T: Sync + Clone> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }
}

impl<T: Sync + Clone> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_repeats_to_len() {
        let v = ScalarOrArray::new_scalar(2.0_f32);
        assert_eq!(v.as_vec(3), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_push_promotes_scalar() {
        let mut v = ScalarOrArray::new_scalar(1.0_f32);
        v.push(2, 5.0);
        assert_eq!(v, ScalarOrArray::Array(vec![1.0, 1.0, 5.0]));

        let mut v: ScalarOrArray<f32> = ScalarOrArray::new_array(vec![]);
        v.push(0, 3.0);
        assert_eq!(v.as_vec(0), vec![3.0]);
    }
}
