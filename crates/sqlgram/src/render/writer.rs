use super::options::{Dialect, Options};
use crate::value::Value;

/// Output buffer and parameter list for a single render walk.
pub(crate) struct Writer<'o> {
    options: &'o Options,
    sql: String,
    params: Vec<Value>,
    /// Set while walking a SELECT list; column aliases render only then.
    projection: bool,
}

impl<'o> Writer<'o> {
    pub(crate) fn new(options: &'o Options) -> Self {
        Self {
            options,
            sql: options.prefix_with.clone(),
            params: Vec::new(),
            projection: false,
        }
    }

    pub(crate) fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    pub(crate) fn in_projection(&self) -> bool {
        self.projection
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Start a top-level clause such as `FROM` or `WHERE`.
    pub(crate) fn clause(&mut self, keyword: &str) {
        self.sql.push_str(&self.options.separate_clause_with);
        self.sql.push_str(keyword);
    }

    /// Append a parameter and emit its marker.
    pub(crate) fn bind(&mut self, value: Value) {
        self.params.push(value);
        if self.options.dialect.numbered_params() {
            self.sql.push_str(&format!("${}", self.params.len()));
        } else {
            self.sql.push('?');
        }
    }

    /// Run `f` with the projection flag set to `on`, restoring it afterwards.
    pub(crate) fn projection<R>(&mut self, on: bool, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.projection, on);
        let out = f(self);
        self.projection = saved;
        out
    }

    pub(crate) fn list<T: Render>(&mut self, items: &[T], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            item.render(self);
        }
    }

    pub(crate) fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Emit SQL text for a grammar node.
pub(crate) trait Render {
    fn render(&self, w: &mut Writer<'_>);
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, w: &mut Writer<'_>) {
        (**self).render(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_follow_dialect() {
        let mysql = Options::default();
        let mut w = Writer::new(&mysql);
        w.bind(Value::from(1));
        w.push(", ");
        w.bind(Value::from(2));
        assert_eq!(w.finish().0, "?, ?");

        let pg = Options {
            dialect: Dialect::PostgreSql,
            ..Options::default()
        };
        let mut w = Writer::new(&pg);
        w.bind(Value::from(1));
        w.push(", ");
        w.bind(Value::from(2));
        let (sql, params) = w.finish();
        assert_eq!(sql, "$1, $2");
        assert_eq!(params, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn projection_flag_is_scoped() {
        let options = Options::default();
        let mut w = Writer::new(&options);
        w.projection(true, |w| {
            assert!(w.in_projection());
            w.projection(false, |w| assert!(!w.in_projection()));
            assert!(w.in_projection());
        });
        assert!(!w.in_projection());
    }

    #[test]
    fn prefix_and_clause_separator() {
        let options = Options {
            separate_clause_with: "\n".into(),
            prefix_with: "/* x */ ".into(),
            ..Options::default()
        };
        let mut w = Writer::new(&options);
        w.push("SELECT ?");
        w.clause("FROM t");
        assert_eq!(w.finish().0, "/* x */ SELECT ?\nFROM t");
    }
}
