mod repl {
    use descent::Evaluator;
    use solvers::{
        format_solution, parse_epsilon, solve, Function, Method, SolveError, DEFAULT_EPSILON,
    };

    const DEFAULT_INTERVAL: (f64, f64) = (-100.0, 100.0);

    // a line is one of:
    //   name = expr                   bind a session variable
    //   eval expr                     evaluate against session bindings
    //   [method] [a b [eps]] expr     locate roots of f(x) = expr
    pub fn parse_statement(cx: &mut Evaluator, input: &str) {
        let line = input.trim();
        if line.is_empty() {
            return;
        }
        if let Some((lhs, rhs)) = line.split_once('=') {
            let name = lhs.trim();
            if is_identifier(name) {
                match cx.eval(rhs) {
                    Err(e) => println!("Eval error: {:?}", e),
                    Ok(value) => {
                        cx.set_var(name, value);
                        println!("{} = {}", name, value);
                    }
                }
                return;
            }
        }
        if let Some(rest) = line.strip_prefix("eval ") {
            match cx.eval(rest) {
                Err(e) => println!("Eval error: {:?}", e),
                Ok(value) => println!("{}", value),
            }
            return;
        }
        solve_statement(line);
    }

    fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => chars.all(|c| c.is_alphanumeric()),
            _ => false,
        }
    }

    fn solve_statement(line: &str) {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        let method = match Method::from_name(words[0]) {
            Some(m) => {
                words.remove(0);
                m
            }
            None => Method::BestSuited,
        };
        let (mut a, mut b) = DEFAULT_INTERVAL;
        let mut epsilon = DEFAULT_EPSILON;
        if words.len() > 2 {
            if let (Ok(lo), Ok(hi)) = (words[0].parse::<f64>(), words[1].parse::<f64>()) {
                a = lo;
                b = hi;
                words.drain(..2);
                if words.len() > 1 && words[0].parse::<f64>().is_ok() {
                    epsilon = parse_epsilon(words[0]);
                    words.remove(0);
                }
            }
        }
        let expr = words.join(" ");
        if expr.is_empty() {
            println!("usage: [method] [a b [eps]] expression");
            return;
        }
        let f = Function::new("f", &expr);
        match solve(&f, method, a, b, epsilon) {
            Err(SolveError::BadExpression(e)) => println!("Parse error: {:?}", e),
            Err(SolveError::Unimplemented(m)) => println!("{:?} is not implemented", m),
            Ok(roots) if roots.is_empty() => println!("no roots in [{}, {}]", a, b),
            Ok(roots) => {
                for root in &roots {
                    println!("{}", format_solution(root));
                }
            }
        }
    }
}

fn main() {
    use descent::Evaluator;

    let mut cx = Evaluator::new();
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::parse_statement(&mut cx, &input[..]);
    } else {
        let histpath = dirs::home_dir().map(|h| h.join(".cero_history"));
        let mut rl = rustyline::Editor::<()>::new();
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                println!("No history yet");
            }
        }
        while let Ok(input) = rl.readline(">> ") {
            rl.add_history_entry(input.as_str());
            repl::parse_statement(&mut cx, &input[..]);
        }
        if let Some(path) = &histpath {
            let _ = rl.save_history(path);
        }
    }
}
